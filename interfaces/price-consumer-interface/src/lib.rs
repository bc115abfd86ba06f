#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, String};
use types::error::Error;

pub mod types;

pub struct Spec;

/// Interface for PriceConsumer
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceConsumerClient")]
pub trait PriceConsumerTrait {
    /// Binds the consumer to a price feed. The feed is not probed here,
    /// a wrong address surfaces on the first read.
    fn initialize(env: Env, price_feed: Address) -> Result<(), Error>;

    fn version() -> u32;

    fn price_feed(env: Env) -> Result<Address, Error>;

    fn description(env: Env) -> Result<String, Error>;

    fn decimals(env: Env) -> Result<u32, Error>;

    /// Answer of the feed's latest round in the feed's own precision
    fn latest_price(env: Env) -> Result<i128, Error>;
}
