use soroban_sdk::{contracttype, Address, BytesN};

/// Everything needed to stand up a price consumer
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeploymentConfig {
    /// Salt the consumer address is derived from
    pub salt: BytesN<32>,
    /// Uploaded price consumer wasm
    pub wasm_hash: BytesN<32>,
    pub environment: Environment,
}

/// Where the consumer takes its prices from
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Environment {
    /// Deploy a price feed mock first and bind the consumer to it
    Test(MockPriceFeedInput),
    /// Bind the consumer to an already deployed price feed
    Production(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MockPriceFeedInput {
    pub salt: BytesN<32>,
    pub wasm_hash: BytesN<32>,
    pub answer: i128,
    pub timestamp: u64,
    pub round_id: u128,
    pub decimals: u32,
}
