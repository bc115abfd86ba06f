use price_consumer_interface::types::error::Error;
use soroban_sdk::{Env, String};

use super::utils::price_feed::price_feed_client;

pub fn description(env: &Env) -> Result<String, Error> {
    Ok(price_feed_client(env)?.description())
}
