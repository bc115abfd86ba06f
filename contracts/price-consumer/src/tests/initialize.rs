#![cfg(test)]
extern crate std;

use crate::tests::sut::{create_price_consumer_contract, init_price_consumer};
use crate::*;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, IntoVal, Symbol};

#[test]
#[should_panic(expected = "HostError: Error(Contract, #0)")]
fn should_fail_if_already_initialized() {
    let env = Env::default();
    let sut = init_price_consumer(&env);

    sut.consumer.initialize(&Address::generate(&env));
}

#[test]
fn should_keep_first_price_feed_on_second_initialize() {
    let env = Env::default();
    let sut = init_price_consumer(&env);

    assert_eq!(
        sut.consumer.try_initialize(&Address::generate(&env)),
        Err(Ok(Error::AlreadyInitialized))
    );
    assert_eq!(sut.consumer.price_feed(), sut.price_feed.address);
}

#[test]
fn should_accept_address_without_price_feed() {
    let env = Env::default();
    let consumer = create_price_consumer_contract(&env);
    let not_a_feed = Address::generate(&env);

    consumer.initialize(&not_a_feed);

    assert_eq!(consumer.price_feed(), not_a_feed);
}

#[test]
fn should_emit_event() {
    let env = Env::default();
    let consumer = create_price_consumer_contract(&env);
    let price_feed = Address::generate(&env);

    consumer.initialize(&price_feed);

    assert_eq!(
        env.events().all(),
        vec![
            &env,
            (
                consumer.address.clone(),
                (Symbol::new(&env, "initialize"), consumer.address.clone()).into_val(&env),
                price_feed.into_val(&env)
            ),
        ]
    );
}

#[test]
fn should_return_version() {
    let env = Env::default();
    let consumer = create_price_consumer_contract(&env);

    assert_eq!(consumer.version(), 1);
}
