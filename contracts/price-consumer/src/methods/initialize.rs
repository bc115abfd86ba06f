use price_consumer_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_price_feed;

use super::utils::validation::require_price_feed_not_exist;

pub fn initialize(env: &Env, price_feed: &Address) -> Result<(), Error> {
    require_price_feed_not_exist(env);

    write_price_feed(env, price_feed);

    event::initialized(env, price_feed);

    Ok(())
}
