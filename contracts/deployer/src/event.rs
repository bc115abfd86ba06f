use soroban_sdk::{symbol_short, Address, Env};

pub(crate) fn deployed(e: &Env, consumer: &Address, price_feed: &Address) {
    let topics = (symbol_short!("deploy"), e.current_contract_address());
    e.events().publish(topics, (consumer.clone(), price_feed.clone()));
}
