use soroban_sdk::{Env, Symbol};

use crate::storage::MockPriceData;

pub(crate) fn initialized(e: &Env, data: &MockPriceData) {
    let topics = (Symbol::new(e, "initialize"), e.current_contract_address());
    e.events().publish(
        topics,
        (data.answer, data.timestamp, data.round_id, data.decimals),
    );
}
