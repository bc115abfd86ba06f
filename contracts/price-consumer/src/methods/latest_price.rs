use price_consumer_interface::types::error::Error;
use soroban_sdk::Env;

use super::utils::price_feed::price_feed_client;

pub fn latest_price(env: &Env) -> Result<i128, Error> {
    let round_data = price_feed_client(env)?.latest_round_data();

    Ok(round_data.answer())
}
