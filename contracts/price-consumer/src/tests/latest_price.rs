#![cfg(test)]
extern crate std;

use crate::tests::sut::{
    create_price_consumer_contract, create_price_feed_contract,
    create_static_price_feed_contract, create_uninitialized_price_feed_contract,
    init_price_consumer, ANSWER, STATIC_LATEST_ROUND,
};
use crate::*;
use soroban_sdk::testutils::Address as _;

#[test]
fn should_return_latest_answer() {
    let env = Env::default();
    let sut = init_price_consumer(&env);

    assert_eq!(sut.consumer.latest_price(), ANSWER);
    assert_eq!(
        sut.consumer.latest_price(),
        sut.price_feed.latest_round_data().answer()
    );
}

#[test]
fn should_return_same_price_on_repeated_calls() {
    let env = Env::default();
    let sut = init_price_consumer(&env);

    let first = sut.consumer.latest_price();
    let second = sut.consumer.latest_price();

    assert_eq!(first, second);
}

#[test]
fn should_return_negative_answer_unchanged() {
    let env = Env::default();
    let price_feed = create_price_feed_contract(&env, -42, 1, 2, 0);
    let consumer = create_price_consumer_contract(&env);

    consumer.initialize(&price_feed.address);

    assert_eq!(consumer.latest_price(), -42);
}

#[test]
fn should_return_only_answer_of_latest_round() {
    let env = Env::default();
    let price_feed = create_static_price_feed_contract(&env);
    let consumer = create_price_consumer_contract(&env);

    consumer.initialize(&price_feed.address);

    assert_eq!(consumer.latest_price(), STATIC_LATEST_ROUND.answer());
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn should_propagate_price_feed_error() {
    let env = Env::default();
    let price_feed = create_uninitialized_price_feed_contract(&env);
    let consumer = create_price_consumer_contract(&env);

    consumer.initialize(&price_feed.address);

    consumer.latest_price();
}

#[test]
#[should_panic]
fn should_fail_if_price_feed_is_not_a_contract() {
    let env = Env::default();
    let consumer = create_price_consumer_contract(&env);

    consumer.initialize(&Address::generate(&env));

    consumer.latest_price();
}
