//! Working tests for the launchpad suite
//! Full deployment wiring: StableToken + Token template + LaunchFactory

use odra::prelude::*;
use odra::prelude::Addressable;
use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, NoArgs};

use crate::launchpad::{
    LaunchFactory, LaunchFactoryHostRef, LaunchFactoryInitArgs, StableToken, StableTokenHostRef,
    Token, TokenInitArgs, STATUS_ACTIVE, STATUS_COMPLETED,
};

fn pow10(exp: u64) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

fn setup_suite() -> (HostEnv, LaunchFactoryHostRef, StableTokenHostRef) {
    let env = odra_test::env();
    let owner = env.get_account(0);
    let router = env.get_account(9);

    let stable_token = StableToken::deploy(&env, NoArgs);

    let template = Token::deploy(
        &env,
        TokenInitArgs {
            name: String::from("Launch Token Template"),
            symbol: String::from("LTT"),
            router,
            minter: owner,
        },
    );

    let factory = LaunchFactory::deploy(
        &env,
        LaunchFactoryInitArgs {
            owner,
            token_template: template.address().clone(),
        },
    );

    (env, factory, stable_token)
}

#[test]
fn test_deploy_suite() {
    let (env, factory, _stable_token) = setup_suite();
    let owner = env.get_account(0);

    assert_eq!(factory.owner(), owner);
    assert_eq!(factory.launch_count(), 0);
}

#[test]
fn test_ido_launch_scenario() {
    let (env, mut factory, stable_token) = setup_suite();
    let other_account = env.get_account(1);

    // softCap 7e35, hardCap 8e35, per-wallet limit 1e35
    env.set_caller(other_account);
    factory.create_launch(
        String::from("IDO Token"),
        String::from("IDOT"),
        U256::from(100),
        U256::from(7) * pow10(35),
        U256::from(8) * pow10(35),
        pow10(35),
        stable_token.address().clone(),
    );

    let launches = factory.get_launches(other_account);
    assert_eq!(launches.len(), 1);

    let launch_id = launches[0];
    assert_eq!(factory.token_name(launch_id), "IDO Token");
    assert_eq!(factory.token_symbol(launch_id), "IDOT");
    assert_eq!(factory.get_launch_creator(launch_id), other_account);
    assert_eq!(factory.get_launch_status(launch_id), STATUS_ACTIVE);
}

#[test]
fn test_purchase_flow() {
    let (env, mut factory, mut stable_token) = setup_suite();
    let deployer = env.get_account(0);
    let creator = env.get_account(1);
    let buyer = env.get_account(2);

    env.set_caller(creator);
    let launch_id = factory.create_launch(
        String::from("IDO Token"),
        String::from("IDOT"),
        U256::from(100),
        U256::from(7_000),
        U256::from(8_000),
        U256::from(1_000),
        stable_token.address().clone(),
    );

    // Fund the buyer and approve the factory for the spend
    env.set_caller(deployer);
    stable_token.transfer(buyer, U256::from(100_000));

    env.set_caller(buyer);
    stable_token.approve(factory.address().clone(), U256::from(50_000));
    let tokens_out = factory.purchase(launch_id, U256::from(50_000));

    // 50_000 stable units at price 100 buys 500 launch token units
    assert_eq!(tokens_out, U256::from(500));
    assert_eq!(factory.token_balance_of(launch_id, buyer), U256::from(500));
    assert_eq!(factory.token_total_supply(launch_id), U256::from(500));
    assert_eq!(factory.get_tokens_sold(launch_id), U256::from(500));
    assert_eq!(factory.get_stable_raised(launch_id), U256::from(50_000));
    assert_eq!(
        stable_token.balance_of(factory.address().clone()),
        U256::from(50_000)
    );
}

#[test]
fn test_purchase_respects_wallet_limit() {
    let (env, mut factory, mut stable_token) = setup_suite();
    let deployer = env.get_account(0);
    let creator = env.get_account(1);
    let buyer = env.get_account(2);

    env.set_caller(creator);
    let launch_id = factory.create_launch(
        String::from("IDO Token"),
        String::from("IDOT"),
        U256::from(100),
        U256::from(7_000),
        U256::from(8_000),
        U256::from(1_000),
        stable_token.address().clone(),
    );

    env.set_caller(deployer);
    stable_token.transfer(buyer, U256::from(1_000_000));

    env.set_caller(buyer);
    stable_token.approve(factory.address().clone(), U256::from(1_000_000));

    // Exactly at the limit succeeds
    factory.purchase(launch_id, U256::from(100_000));
    assert_eq!(factory.token_balance_of(launch_id, buyer), U256::from(1_000));

    // One more unit past the limit fails and leaves state unchanged
    let result = factory.try_purchase(launch_id, U256::from(100));
    assert!(result.is_err());
    assert_eq!(factory.token_balance_of(launch_id, buyer), U256::from(1_000));
    assert_eq!(factory.get_tokens_sold(launch_id), U256::from(1_000));
}

#[test]
fn test_purchase_past_hard_cap_fails() {
    let (env, mut factory, mut stable_token) = setup_suite();
    let deployer = env.get_account(0);
    let creator = env.get_account(1);
    let buyer = env.get_account(2);

    env.set_caller(creator);
    let launch_id = factory.create_launch(
        String::from("IDO Token"),
        String::from("IDOT"),
        U256::from(100),
        U256::from(700),
        U256::from(800),
        U256::from(800),
        stable_token.address().clone(),
    );

    env.set_caller(deployer);
    stable_token.transfer(buyer, U256::from(100_000));
    env.set_caller(buyer);
    stable_token.approve(factory.address().clone(), U256::from(100_000));

    // 500 of 800 sold, launch still active
    factory.purchase(launch_id, U256::from(50_000));
    assert_eq!(factory.get_tokens_sold(launch_id), U256::from(500));
    assert_eq!(factory.get_launch_status(launch_id), STATUS_ACTIVE);

    // 400 more would overshoot the cap; the buy fails and nothing moves
    let result = factory.try_purchase(launch_id, U256::from(40_000));
    assert!(result.is_err());
    assert_eq!(factory.get_tokens_sold(launch_id), U256::from(500));
    assert_eq!(factory.token_balance_of(launch_id, buyer), U256::from(500));
    assert_eq!(factory.get_launch_status(launch_id), STATUS_ACTIVE);
}

#[test]
fn test_launch_completes_at_hard_cap() {
    let (env, mut factory, mut stable_token) = setup_suite();
    let deployer = env.get_account(0);
    let creator = env.get_account(1);

    env.set_caller(creator);
    let launch_id = factory.create_launch(
        String::from("IDO Token"),
        String::from("IDOT"),
        U256::from(100),
        U256::from(700),
        U256::from(800),
        U256::from(800),
        stable_token.address().clone(),
    );

    let buyers = [env.get_account(2), env.get_account(3)];
    for buyer in buyers {
        env.set_caller(deployer);
        stable_token.transfer(buyer, U256::from(40_000));
        env.set_caller(buyer);
        stable_token.approve(factory.address().clone(), U256::from(40_000));
        factory.purchase(launch_id, U256::from(40_000));
    }

    assert_eq!(factory.get_tokens_sold(launch_id), U256::from(800));
    assert_eq!(factory.get_launch_status(launch_id), STATUS_COMPLETED);

    // Completed launches reject further purchases
    let late_buyer = env.get_account(4);
    env.set_caller(deployer);
    stable_token.transfer(late_buyer, U256::from(1_000));
    env.set_caller(late_buyer);
    stable_token.approve(factory.address().clone(), U256::from(1_000));
    assert!(factory.try_purchase(launch_id, U256::from(1_000)).is_err());
}

#[test]
fn test_purchase_without_approval_fails() {
    let (env, mut factory, mut stable_token) = setup_suite();
    let deployer = env.get_account(0);
    let creator = env.get_account(1);
    let buyer = env.get_account(2);

    env.set_caller(creator);
    let launch_id = factory.create_launch(
        String::from("IDO Token"),
        String::from("IDOT"),
        U256::from(100),
        U256::from(7_000),
        U256::from(8_000),
        U256::from(1_000),
        stable_token.address().clone(),
    );

    env.set_caller(deployer);
    stable_token.transfer(buyer, U256::from(10_000));

    env.set_caller(buyer);
    assert!(factory.try_purchase(launch_id, U256::from(10_000)).is_err());
    assert_eq!(factory.get_tokens_sold(launch_id), U256::zero());
}

#[test]
fn test_launch_token_transfer() {
    let (env, mut factory, mut stable_token) = setup_suite();
    let deployer = env.get_account(0);
    let creator = env.get_account(1);
    let buyer = env.get_account(2);
    let friend = env.get_account(3);

    env.set_caller(creator);
    let launch_id = factory.create_launch(
        String::from("IDO Token"),
        String::from("IDOT"),
        U256::from(100),
        U256::from(7_000),
        U256::from(8_000),
        U256::from(1_000),
        stable_token.address().clone(),
    );

    env.set_caller(deployer);
    stable_token.transfer(buyer, U256::from(50_000));
    env.set_caller(buyer);
    stable_token.approve(factory.address().clone(), U256::from(50_000));
    factory.purchase(launch_id, U256::from(50_000));

    factory.token_transfer(launch_id, friend, U256::from(200));
    assert_eq!(factory.token_balance_of(launch_id, buyer), U256::from(300));
    assert_eq!(factory.token_balance_of(launch_id, friend), U256::from(200));
}

#[test]
fn test_multiple_launches_share_one_stable_token() {
    let (env, mut factory, stable_token) = setup_suite();
    let creator1 = env.get_account(1);
    let creator2 = env.get_account(2);

    env.set_caller(creator1);
    factory.create_launch(
        String::from("First"),
        String::from("FST"),
        U256::from(50),
        U256::from(1_000),
        U256::from(2_000),
        U256::from(500),
        stable_token.address().clone(),
    );

    env.set_caller(creator2);
    factory.create_launch(
        String::from("Second"),
        String::from("SND"),
        U256::from(200),
        U256::from(3_000),
        U256::from(4_000),
        U256::from(1_000),
        stable_token.address().clone(),
    );

    assert_eq!(factory.launch_count(), 2);
    assert_eq!(factory.get_launches(creator1), vec![0]);
    assert_eq!(factory.get_launches(creator2), vec![1]);
    assert_eq!(factory.token_symbol(0), "FST");
    assert_eq!(factory.token_symbol(1), "SND");
}
