use price_feed_interface::types::error::Error;
use soroban_sdk::{contracttype, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    PriceData,
}

/// Values the mock was initialized with, returned verbatim by every accessor
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MockPriceData {
    pub answer: i128,
    pub timestamp: u64,
    pub round_id: u128,
    pub decimals: u32,
}

pub fn has_price_data(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::PriceData)
}

pub fn write_price_data(env: &Env, data: &MockPriceData) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::PriceData, data);
}

pub fn read_price_data(env: &Env) -> Result<MockPriceData, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::PriceData)
        .ok_or(Error::Uninitialized)
}
