use price_consumer_interface::types::error::Error;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::Env;

use crate::storage::read_price_feed;

/// Client bound to the stored feed. Calls through it abort the invocation
/// with the feed's own error if the feed fails.
pub fn price_feed_client(env: &Env) -> Result<PriceFeedClient<'_>, Error> {
    let price_feed = read_price_feed(env)?;

    Ok(PriceFeedClient::new(env, &price_feed))
}
