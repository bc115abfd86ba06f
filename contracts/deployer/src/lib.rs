#![deny(warnings)]
#![no_std]

use soroban_sdk::{contract, contractimpl, log, vec, Address, Env, IntoVal, Symbol, Val};
use types::{DeploymentConfig, Environment, MockPriceFeedInput};

mod event;
pub mod types;

#[contract]
pub struct Deployer;

#[contractimpl]
impl Deployer {
    /// Deploy the price consumer contract wasm and bind it to the price feed selected by
    /// `config.environment`. For `Environment::Test` a price feed mock is deployed and
    /// initialized first. Returns the consumer and the price feed addresses.
    pub fn deploy(env: Env, config: DeploymentConfig) -> (Address, Address) {
        let price_feed = match config.environment {
            Environment::Test(input) => deploy_price_feed_mock(&env, &input),
            Environment::Production(price_feed) => price_feed,
        };

        let consumer = env
            .deployer()
            .with_current_contract(config.salt)
            .deploy(config.wasm_hash);
        let init_fn = Symbol::new(&env, "initialize");
        let init_args = vec![&env, price_feed.into_val(&env)];
        let _: Val = env.invoke_contract(&consumer, &init_fn, init_args);

        log!(&env, "price consumer deployed", consumer, price_feed);
        event::deployed(&env, &consumer, &price_feed);

        (consumer, price_feed)
    }
}

fn deploy_price_feed_mock(env: &Env, input: &MockPriceFeedInput) -> Address {
    let id = env
        .deployer()
        .with_current_contract(input.salt.clone())
        .deploy(input.wasm_hash.clone());
    let init_fn = Symbol::new(env, "initialize");
    let init_args = vec![
        env,
        input.answer.into_val(env),
        input.timestamp.into_val(env),
        input.round_id.into_val(env),
        input.decimals.into_val(env),
    ];
    let _: Val = env.invoke_contract(&id, &init_fn, init_args);

    log!(env, "price feed mock deployed", id);

    id
}
