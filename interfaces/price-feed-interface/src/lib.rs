//! Round-based price feed interface.
//!
//! Any contract exposing [`PriceFeedTrait`] can be read by the price consumer.
//! [`LegacyPriceFeedTrait`] keeps the older single-value accessors that some
//! feeds still publish next to the round data.

#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env, String};
use types::error::Error;
use types::round_data::RoundData;

pub mod types;

/// Width of a round identifier in bits
pub const ROUND_ID_BITS: u32 = 80;

/// Largest round identifier a feed can publish
pub const MAX_ROUND_ID: u128 = (1u128 << ROUND_ID_BITS) - 1;

pub struct Spec;

/// Oracle feed interface description
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedTrait {
    /// Return the number of decimals the answer is reported with
    fn decimals(env: Env) -> Result<u32, Error>;

    /// Return a human readable description of the feed
    fn description(env: Env) -> Result<String, Error>;

    /// Return the feed implementation version
    fn version(env: Env) -> u32;

    /// Get the reading published in the given round
    fn round_data(env: Env, round_id: u128) -> Result<RoundData, Error>;

    /// Get the most recent reading
    fn latest_round_data(env: Env) -> Result<RoundData, Error>;
}

/// Single-value accessors duplicating parts of `latest_round_data`
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LegacyPriceFeedClient")]
pub trait LegacyPriceFeedTrait {
    fn latest_answer(env: Env) -> Result<i128, Error>;

    fn latest_timestamp(env: Env) -> Result<u64, Error>;

    fn latest_round(env: Env) -> Result<u128, Error>;
}

/// Returns `true` if `round_id` fits into [`ROUND_ID_BITS`]
pub fn is_valid_round_id(round_id: u128) -> bool {
    round_id <= MAX_ROUND_ID
}
