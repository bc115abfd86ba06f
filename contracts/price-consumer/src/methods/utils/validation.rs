use price_consumer_interface::types::error::Error;
use soroban_sdk::{panic_with_error, Env};

use crate::storage::has_price_feed;

pub fn require_price_feed_not_exist(env: &Env) {
    if has_price_feed(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}
