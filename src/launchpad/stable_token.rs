//! StableToken - payment asset for launch purchases
//!
//! Deployed with no arguments. The full supply is minted to the deployer,
//! which then distributes it; there is no further minting.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::{Transfer, Approval};
use super::errors::LaunchpadError;

/// StableToken module, a plain CEP-18 token with a fixed supply
#[odra::module]
pub struct StableToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of tokens
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl StableToken {
    /// Initialize the StableToken and mint the full supply to the deployer
    pub fn init(&mut self) {
        let deployer = self.env().caller();

        self.name.set(String::from("Stable Token"));
        self.symbol.set(String::from("STBL"));
        self.decimals.set(18);

        // 1 billion tokens with 18 decimals
        let supply = U256::from(1_000_000_000u64) * U256::from(10u64).pow(U256::from(18));
        self.total_supply.set(supply);
        self.balances.set(&deployer, supply);

        self.env().emit_event(Transfer {
            from: Address::from(self.env().self_address()),
            to: deployer,
            value: supply,
        });
    }

    // ============ View Functions ============

    /// Get the token name
    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    /// Get the token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    /// Get the token decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    /// Get the total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    /// Get the allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    // ============ Write Functions ============

    /// Transfer tokens to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Approve a spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.allowances.set(&(caller, spender), amount);

        self.env().emit_event(Approval {
            owner: caller,
            spender,
            value: amount,
        });
        true
    }

    /// Transfer tokens from one address to another (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(LaunchpadError::InsufficientBalance);
        }

        self.allowances.set(&(from, caller), current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    // ============ Internal Functions ============

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(LaunchpadError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }
}
