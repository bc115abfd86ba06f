use price_consumer_interface::types::error::Error;
use soroban_sdk::Env;

use super::utils::price_feed::price_feed_client;

pub fn decimals(env: &Env) -> Result<u32, Error> {
    Ok(price_feed_client(env)?.decimals())
}
