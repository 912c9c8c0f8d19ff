//! Contract events shared across the launchpad suite
use odra::prelude::*;
use odra::casper_types::U256;

/// Emitted on every token balance movement (mint, burn, transfer)
#[odra::event]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub value: U256,
}

/// Emitted when a spender allowance is set
#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
}

/// Emitted when a new launch is registered
#[odra::event]
pub struct LaunchCreated {
    pub launch_id: u64,
    pub creator: Address,
    pub name: String,
    pub symbol: String,
    pub hard_cap: U256,
}

/// Emitted when a wallet buys into a launch
#[odra::event]
pub struct TokensPurchased {
    pub launch_id: u64,
    pub buyer: Address,
    pub stable_amount: U256,
    pub tokens_out: U256,
}
