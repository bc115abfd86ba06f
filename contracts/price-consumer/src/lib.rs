#![deny(warnings)]
#![no_std]

use methods::{
    decimals::decimals, description::description, initialize::initialize,
    latest_price::latest_price,
};
use price_consumer_interface::types::error::Error;
use price_consumer_interface::PriceConsumerTrait;
use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct PriceConsumer;

#[contractimpl]
impl PriceConsumerTrait for PriceConsumer {
    fn initialize(env: Env, price_feed: Address) -> Result<(), Error> {
        initialize(&env, &price_feed)
    }

    fn version() -> u32 {
        1
    }

    fn price_feed(env: Env) -> Result<Address, Error> {
        read_price_feed(&env)
    }

    fn description(env: Env) -> Result<String, Error> {
        description(&env)
    }

    fn decimals(env: Env) -> Result<u32, Error> {
        decimals(&env)
    }

    fn latest_price(env: Env) -> Result<i128, Error> {
        latest_price(&env)
    }
}
