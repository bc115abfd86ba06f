#![deny(warnings)]
#![no_std]

mod constants;
mod event;
mod storage;

use crate::storage::*;
use price_feed_interface::types::{error::Error, round_data::RoundData};
use price_feed_interface::{is_valid_round_id, LegacyPriceFeedTrait, PriceFeedTrait};
use soroban_sdk::{contract, contractclient, contractimpl, Env, String};

#[contractclient(name = "PriceFeedMockAdminClient")]
pub trait PriceFeedMockAdminTrait {
    fn initialize(
        env: Env,
        answer: i128,
        timestamp: u64,
        round_id: u128,
        decimals: u32,
    ) -> Result<(), Error>;
}

#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedMockAdminTrait for PriceFeedMock {
    fn initialize(
        env: Env,
        answer: i128,
        timestamp: u64,
        round_id: u128,
        decimals: u32,
    ) -> Result<(), Error> {
        if has_price_data(&env) {
            return Err(Error::AlreadyInitialized);
        }

        let data = MockPriceData {
            answer,
            timestamp,
            round_id,
            decimals,
        };

        write_price_data(&env, &data);
        event::initialized(&env, &data);

        Ok(())
    }
}

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn decimals(env: Env) -> Result<u32, Error> {
        Ok(read_price_data(&env)?.decimals)
    }

    fn description(env: Env) -> Result<String, Error> {
        Ok(String::from_str(&env, constants::DESCRIPTION))
    }

    fn version(_env: Env) -> u32 {
        constants::VERSION
    }

    /// The mock keeps a single round, every representable id resolves to it
    fn round_data(env: Env, round_id: u128) -> Result<RoundData, Error> {
        if !is_valid_round_id(round_id) {
            return Err(Error::RoundIdOutOfRange);
        }

        Self::latest_round_data(env)
    }

    fn latest_round_data(env: Env) -> Result<RoundData, Error> {
        let data = read_price_data(&env)?;

        Ok(RoundData(
            data.round_id,
            data.answer,
            data.timestamp,
            data.timestamp,
            data.round_id,
        ))
    }
}

#[contractimpl]
impl LegacyPriceFeedTrait for PriceFeedMock {
    fn latest_answer(env: Env) -> Result<i128, Error> {
        Ok(read_price_data(&env)?.answer)
    }

    fn latest_timestamp(env: Env) -> Result<u64, Error> {
        Ok(read_price_data(&env)?.timestamp)
    }

    fn latest_round(env: Env) -> Result<u128, Error> {
        Ok(read_price_data(&env)?.round_id)
    }
}
