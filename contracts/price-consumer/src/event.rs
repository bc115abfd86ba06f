use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, price_feed: &Address) {
    let topics = (Symbol::new(e, "initialize"), e.current_contract_address());
    e.events().publish(topics, price_feed.clone());
}
