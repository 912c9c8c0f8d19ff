//! Token - CEP-18 compatible token with restricted minting
//!
//! Launch tokens are created from this template. The token carries the
//! DEX router reference it will graduate against, and only the configured
//! minter may mint or burn.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::{Transfer, Approval};
use super::errors::LaunchpadError;

/// Token module implementing CEP-18 with restricted minting
#[odra::module]
pub struct Token {
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
    /// DEX router this token graduates against
    router: Var<Address>,
    /// Minter address
    minter: Var<Address>,
}

#[odra::module]
impl Token {
    /// Initialize the Token
    pub fn init(&mut self, name: String, symbol: String, router: Address, minter: Address) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(18);
        self.total_supply.set(U256::zero());
        self.router.set(router);
        self.minter.set(minter);
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

    /// Get the router address
    pub fn router(&self) -> Address {
        self.router.get_or_revert_with(LaunchpadError::Unauthorized)
    }

    /// Get the minter address
    pub fn minter(&self) -> Address {
        self.minter.get_or_revert_with(LaunchpadError::Unauthorized)
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
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens from one address to another (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(LaunchpadError::InsufficientBalance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Mint new tokens - ONLY callable by the minter
    pub fn mint(&mut self, to: Address, amount: U256) {
        let caller = self.env().caller();
        let minter = self.minter.get_or_revert_with(LaunchpadError::Unauthorized);

        if caller != minter {
            self.env().revert(LaunchpadError::Unauthorized);
        }

        let current_supply = self.total_supply();
        self.total_supply.set(current_supply + amount);

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);

        self.env().emit_event(Transfer {
            from: Address::from(self.env().self_address()),
            to,
            value: amount,
        });
    }

    /// Burn tokens - ONLY callable by the minter
    pub fn burn(&mut self, from: Address, amount: U256) {
        let caller = self.env().caller();
        let minter = self.minter.get_or_revert_with(LaunchpadError::Unauthorized);

        if caller != minter {
            self.env().revert(LaunchpadError::Unauthorized);
        }

        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(LaunchpadError::InsufficientBalance);
        }

        self.balances.set(&from, current_balance - amount);

        let current_supply = self.total_supply();
        self.total_supply.set(current_supply - amount);

        self.env().emit_event(Transfer {
            from,
            to: Address::from(self.env().self_address()),
            value: amount,
        });
    }

    // ============ Internal Functions ============

    /// Internal transfer function
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

    /// Internal approve function
    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }
}

/// CEP-18 surface consumed by other contracts in the suite
#[odra::external_contract]
pub trait Cep18Token {
    fn name(&self) -> String;
    fn symbol(&self) -> String;
    fn decimals(&self) -> u8;
    fn total_supply(&self) -> U256;
    fn balance_of(&self, owner: Address) -> U256;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn transfer(&mut self, to: Address, amount: U256) -> bool;
    fn approve(&mut self, spender: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;
}
