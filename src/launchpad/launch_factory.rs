//! LaunchFactory - the launch registry
//!
//! Registers new token launches from a caller-supplied configuration and
//! indexes them by creator. Launches are identified by sequential ids.
//!
//! The original design clones a singleton Launch contract per launch. Casper
//! contracts cannot install new contracts at runtime, so the factory keeps a
//! shared Token template (decimals, router binding) and holds the per-launch
//! token state itself: metadata, supply and balances keyed by launch id.
//! Record fields live in separate mappings due to CLTyped constraints.

use odra::prelude::*;
use odra::ContractRef;
use odra::casper_types::U256;
use crate::events::{LaunchCreated, TokensPurchased, Transfer};
use super::errors::LaunchpadError;
use super::token::Cep18TokenContractRef;

/// Launch status: accepting purchases
pub const STATUS_ACTIVE: u8 = 0;
/// Launch status: hard cap reached
pub const STATUS_COMPLETED: u8 = 1;

/// Maximum symbol length in bytes
pub const MAX_SYMBOL_LEN: usize = 6;

/// LaunchFactory contract holding the launch registry
#[odra::module]
pub struct LaunchFactory {
    /// Contract owner (can toggle validation, transfer ownership)
    owner: Var<Address>,
    /// Shared Token template all launches derive defaults from
    token_template: Var<Address>,
    /// Total number of launches created; also the next launch id
    launch_count: Var<u64>,

    /// Mapping: launch_id -> token name
    launch_names: Mapping<u64, String>,
    /// Mapping: launch_id -> token symbol
    launch_symbols: Mapping<u64, String>,
    /// Mapping: launch_id -> price (stable units per launch token unit)
    launch_prices: Mapping<u64, U256>,
    /// Mapping: launch_id -> soft cap (launch token units)
    launch_soft_caps: Mapping<u64, U256>,
    /// Mapping: launch_id -> hard cap (launch token units)
    launch_hard_caps: Mapping<u64, U256>,
    /// Mapping: launch_id -> per-wallet purchase limit (launch token units)
    launch_purchase_limits: Mapping<u64, U256>,
    /// Mapping: launch_id -> stable token used for payment
    launch_stable_tokens: Mapping<u64, Address>,
    /// Mapping: launch_id -> creator address
    launch_creators: Mapping<u64, Address>,
    /// Mapping: launch_id -> token decimals (copied from the template)
    launch_decimals: Mapping<u64, u8>,
    /// Mapping: launch_id -> creation block time
    launch_created_at: Mapping<u64, u64>,
    /// Mapping: launch_id -> status
    launch_statuses: Mapping<u64, u8>,
    /// Mapping: launch_id -> launch tokens sold so far
    launch_tokens_sold: Mapping<u64, U256>,
    /// Mapping: launch_id -> stable tokens raised so far
    launch_stable_raised: Mapping<u64, U256>,

    /// Creator index: creator -> number of launches
    creator_launch_count: Mapping<Address, u64>,
    /// Creator index: (creator, position) -> launch_id, insertion ordered
    creator_launches: Mapping<(Address, u64), u64>,

    /// Launch token ledger: launch_id -> total supply
    token_supplies: Mapping<u64, U256>,
    /// Launch token ledger: (launch_id, owner) -> balance
    token_balances: Mapping<(u64, Address), U256>,
    /// Cumulative tokens bought per wallet: (launch_id, wallet) -> amount
    purchased: Mapping<(u64, Address), U256>,
    /// Symbols already claimed by a launch
    symbol_taken: Mapping<String, bool>,

    /// Reject configs with hard_cap < soft_cap, bad limits or zero price
    validate_caps: Var<bool>,
    /// Reject empty names, overlong or duplicate symbols
    validate_symbols: Var<bool>,
}

#[odra::module]
impl LaunchFactory {
    /// Initialize the LaunchFactory
    ///
    /// Validation switches start disabled; the owner opts in via the setters.
    pub fn init(&mut self, owner: Address, token_template: Address) {
        self.owner.set(owner);
        self.token_template.set(token_template);
        self.launch_count.set(0);
        self.validate_caps.set(false);
        self.validate_symbols.set(false);
    }

    // ============ View Functions ============

    /// Get the owner address
    pub fn owner(&self) -> Address {
        self.owner.get_or_revert_with(LaunchpadError::Unauthorized)
    }

    /// Get the Token template address
    pub fn token_template(&self) -> Address {
        self.token_template.get_or_revert_with(LaunchpadError::Unauthorized)
    }

    /// Get total launch count
    pub fn launch_count(&self) -> u64 {
        self.launch_count.get_or_default()
    }

    /// Whether cap validation is enabled
    pub fn cap_validation(&self) -> bool {
        self.validate_caps.get_or_default()
    }

    /// Whether symbol validation is enabled
    pub fn symbol_validation(&self) -> bool {
        self.validate_symbols.get_or_default()
    }

    /// Get all launch ids created by `creator`, in creation order
    pub fn get_launches(&self, creator: Address) -> Vec<u64> {
        let count = self.creator_launch_count.get(&creator).unwrap_or_default();
        let mut ids = Vec::new();
        for position in 0..count {
            ids.push(self.creator_launches.get(&(creator, position)).unwrap_or_default());
        }
        ids
    }

    /// Get launch token name by id
    pub fn get_launch_name(&self, id: u64) -> String {
        self.require_launch(id);
        self.launch_names.get(&id).unwrap_or_default()
    }

    /// Get launch token symbol by id
    pub fn get_launch_symbol(&self, id: u64) -> String {
        self.require_launch(id);
        self.launch_symbols.get(&id).unwrap_or_default()
    }

    /// Get launch price by id
    pub fn get_launch_price(&self, id: u64) -> U256 {
        self.require_launch(id);
        self.launch_prices.get(&id).unwrap_or_default()
    }

    /// Get launch soft cap by id
    pub fn get_launch_soft_cap(&self, id: u64) -> U256 {
        self.require_launch(id);
        self.launch_soft_caps.get(&id).unwrap_or_default()
    }

    /// Get launch hard cap by id
    pub fn get_launch_hard_cap(&self, id: u64) -> U256 {
        self.require_launch(id);
        self.launch_hard_caps.get(&id).unwrap_or_default()
    }

    /// Get per-wallet purchase limit by id
    pub fn get_launch_purchase_limit(&self, id: u64) -> U256 {
        self.require_launch(id);
        self.launch_purchase_limits.get(&id).unwrap_or_default()
    }

    /// Get the stable token a launch is paid in
    pub fn get_launch_stable_token(&self, id: u64) -> Address {
        self.require_launch(id);
        self.launch_stable_tokens
            .get(&id)
            .unwrap_or_else(|| self.env().revert(LaunchpadError::LaunchNotFound))
    }

    /// Get launch creator by id
    pub fn get_launch_creator(&self, id: u64) -> Address {
        self.require_launch(id);
        self.launch_creators
            .get(&id)
            .unwrap_or_else(|| self.env().revert(LaunchpadError::LaunchNotFound))
    }

    /// Get launch creation time by id
    pub fn get_launch_created_at(&self, id: u64) -> u64 {
        self.require_launch(id);
        self.launch_created_at.get(&id).unwrap_or_default()
    }

    /// Get launch status by id
    pub fn get_launch_status(&self, id: u64) -> u8 {
        self.require_launch(id);
        self.launch_statuses.get(&id).unwrap_or_default()
    }

    /// Get launch tokens sold so far
    pub fn get_tokens_sold(&self, id: u64) -> U256 {
        self.require_launch(id);
        self.launch_tokens_sold.get(&id).unwrap_or_default()
    }

    /// Get stable tokens raised so far
    pub fn get_stable_raised(&self, id: u64) -> U256 {
        self.require_launch(id);
        self.launch_stable_raised.get(&id).unwrap_or_default()
    }

    // ============ Launch Token Ledger ============

    /// Get a launch token's name; always equals the creating config's name
    pub fn token_name(&self, id: u64) -> String {
        self.get_launch_name(id)
    }

    /// Get a launch token's symbol; always equals the creating config's symbol
    pub fn token_symbol(&self, id: u64) -> String {
        self.get_launch_symbol(id)
    }

    /// Get a launch token's decimals (copied from the template at creation)
    pub fn token_decimals(&self, id: u64) -> u8 {
        self.require_launch(id);
        self.launch_decimals.get(&id).unwrap_or_default()
    }

    /// Get a launch token's total supply
    pub fn token_total_supply(&self, id: u64) -> U256 {
        self.require_launch(id);
        self.token_supplies.get(&id).unwrap_or_default()
    }

    /// Get a wallet's balance of a launch token
    pub fn token_balance_of(&self, id: u64, owner: Address) -> U256 {
        self.require_launch(id);
        self.token_balances.get(&(id, owner)).unwrap_or_default()
    }

    /// Transfer launch tokens to another wallet
    pub fn token_transfer(&mut self, id: u64, to: Address, amount: U256) -> bool {
        self.require_launch(id);
        let caller = self.env().caller();

        let from_balance = self.token_balances.get(&(id, caller)).unwrap_or_default();
        if from_balance < amount {
            self.env().revert(LaunchpadError::InsufficientBalance);
        }

        self.token_balances.set(&(id, caller), from_balance - amount);
        let to_balance = self.token_balances.get(&(id, to)).unwrap_or_default();
        self.token_balances.set(&(id, to), to_balance + amount);

        self.env().emit_event(Transfer {
            from: caller,
            to,
            value: amount,
        });
        true
    }

    // ============ Write Functions ============

    /// Create a new token launch
    ///
    /// The caller becomes the launch creator. The new id is appended to the
    /// caller's entry in the registry index. Validation reverts fire before
    /// any state is written, so a rejected config leaves the registry
    /// untouched.
    ///
    /// # Arguments
    /// * `name` - Launch token name
    /// * `symbol` - Launch token symbol (max 6 bytes when validated)
    /// * `price` - Stable token units per launch token unit
    /// * `soft_cap` - Funding floor, in launch token units
    /// * `hard_cap` - Funding ceiling, in launch token units
    /// * `purchase_limit_per_wallet` - Per-wallet cap, in launch token units
    /// * `stable_token` - Payment asset address
    pub fn create_launch(
        &mut self,
        name: String,
        symbol: String,
        price: U256,
        soft_cap: U256,
        hard_cap: U256,
        purchase_limit_per_wallet: U256,
        stable_token: Address,
    ) -> u64 {
        if self.validate_caps.get_or_default() {
            if hard_cap.is_zero() || hard_cap < soft_cap {
                self.env().revert(LaunchpadError::InvalidCaps);
            }
            if purchase_limit_per_wallet > hard_cap {
                self.env().revert(LaunchpadError::InvalidPurchaseLimit);
            }
            if price.is_zero() {
                self.env().revert(LaunchpadError::InvalidPrice);
            }
        }
        if self.validate_symbols.get_or_default() {
            if name.is_empty() {
                self.env().revert(LaunchpadError::EmptyName);
            }
            if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
                self.env().revert(LaunchpadError::InvalidSymbol);
            }
            if self.symbol_taken.get(&symbol).unwrap_or_default() {
                self.env().revert(LaunchpadError::DuplicateSymbol);
            }
        }

        let caller = self.env().caller();
        let new_id = self.launch_count.get_or_default();
        let created_at = self.env().get_block_time();

        // Shared defaults come from the template, per-launch state stays here
        let template = self.token_template();
        let decimals = Cep18TokenContractRef::new(self.env(), template).decimals();

        self.launch_names.set(&new_id, name.clone());
        self.launch_symbols.set(&new_id, symbol.clone());
        self.launch_prices.set(&new_id, price);
        self.launch_soft_caps.set(&new_id, soft_cap);
        self.launch_hard_caps.set(&new_id, hard_cap);
        self.launch_purchase_limits.set(&new_id, purchase_limit_per_wallet);
        self.launch_stable_tokens.set(&new_id, stable_token);
        self.launch_creators.set(&new_id, caller);
        self.launch_decimals.set(&new_id, decimals);
        self.launch_created_at.set(&new_id, created_at);
        self.launch_statuses.set(&new_id, STATUS_ACTIVE);
        self.launch_tokens_sold.set(&new_id, U256::zero());
        self.launch_stable_raised.set(&new_id, U256::zero());
        self.token_supplies.set(&new_id, U256::zero());
        self.symbol_taken.set(&symbol, true);

        let position = self.creator_launch_count.get(&caller).unwrap_or_default();
        self.creator_launches.set(&(caller, position), new_id);
        self.creator_launch_count.set(&caller, position + 1);
        self.launch_count.set(new_id + 1);

        self.env().emit_event(LaunchCreated {
            launch_id: new_id,
            creator: caller,
            name,
            symbol,
            hard_cap,
        });

        new_id
    }

    /// Buy into a launch with its stable token
    ///
    /// Pulls `stable_amount` from the caller (requires a prior approval on
    /// the stable token) and mints `stable_amount / price` launch tokens to
    /// the caller. Hitting the hard cap exactly completes the launch.
    pub fn purchase(&mut self, id: u64, stable_amount: U256) -> U256 {
        self.require_launch(id);

        if self.launch_statuses.get(&id).unwrap_or_default() != STATUS_ACTIVE {
            self.env().revert(LaunchpadError::LaunchNotActive);
        }
        if stable_amount.is_zero() {
            self.env().revert(LaunchpadError::ZeroAmount);
        }

        let price = self.launch_prices.get(&id).unwrap_or_default();
        if price.is_zero() {
            self.env().revert(LaunchpadError::InvalidPrice);
        }
        let tokens_out = stable_amount / price;
        if tokens_out.is_zero() {
            self.env().revert(LaunchpadError::ZeroAmount);
        }

        let caller = self.env().caller();
        let limit = self.launch_purchase_limits.get(&id).unwrap_or_default();
        let already = self.purchased.get(&(id, caller)).unwrap_or_default();
        if already + tokens_out > limit {
            self.env().revert(LaunchpadError::PurchaseLimitExceeded);
        }

        let hard_cap = self.launch_hard_caps.get(&id).unwrap_or_default();
        let sold = self.launch_tokens_sold.get(&id).unwrap_or_default();
        if sold + tokens_out > hard_cap {
            self.env().revert(LaunchpadError::HardCapReached);
        }

        let stable = self
            .launch_stable_tokens
            .get(&id)
            .unwrap_or_else(|| self.env().revert(LaunchpadError::LaunchNotFound));
        let mut stable_ref = Cep18TokenContractRef::new(self.env(), stable);
        let pulled = stable_ref.transfer_from(caller, self.env().self_address(), stable_amount);
        if !pulled {
            self.env().revert(LaunchpadError::TransferFailed);
        }

        let balance = self.token_balances.get(&(id, caller)).unwrap_or_default();
        self.token_balances.set(&(id, caller), balance + tokens_out);
        let supply = self.token_supplies.get(&id).unwrap_or_default();
        self.token_supplies.set(&id, supply + tokens_out);

        self.purchased.set(&(id, caller), already + tokens_out);
        self.launch_tokens_sold.set(&id, sold + tokens_out);
        let raised = self.launch_stable_raised.get(&id).unwrap_or_default();
        self.launch_stable_raised.set(&id, raised + stable_amount);

        if sold + tokens_out == hard_cap {
            self.launch_statuses.set(&id, STATUS_COMPLETED);
        }

        self.env().emit_event(TokensPurchased {
            launch_id: id,
            buyer: caller,
            stable_amount,
            tokens_out,
        });

        tokens_out
    }

    // ============ Admin Functions ============

    /// Enable or disable cap validation
    pub fn set_cap_validation(&mut self, enabled: bool) {
        self.require_owner();
        self.validate_caps.set(enabled);
    }

    /// Enable or disable symbol validation
    pub fn set_symbol_validation(&mut self, enabled: bool) {
        self.require_owner();
        self.validate_symbols.set(enabled);
    }

    /// Transfer ownership
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.require_owner();
        self.owner.set(new_owner);
    }

    // ============ Internal Functions ============

    /// Revert unless the launch id resolves to an existing record
    fn require_launch(&self, id: u64) {
        if id >= self.launch_count.get_or_default() {
            self.env().revert(LaunchpadError::LaunchNotFound);
        }
    }

    /// Revert unless the caller is the owner
    fn require_owner(&self) {
        let caller = self.env().caller();
        let owner = self.owner.get_or_revert_with(LaunchpadError::Unauthorized);
        if caller != owner {
            self.env().revert(LaunchpadError::Unauthorized);
        }
    }
}

/// External interface for LaunchFactory
#[odra::external_contract]
pub trait LaunchFactoryContract {
    fn launch_count(&self) -> u64;
    fn get_launches(&self, creator: Address) -> Vec<u64>;
    fn get_launch_name(&self, id: u64) -> String;
    fn get_launch_symbol(&self, id: u64) -> String;
    fn get_launch_creator(&self, id: u64) -> Address;
    fn get_launch_status(&self, id: u64) -> u8;
    fn token_name(&self, id: u64) -> String;
    fn token_symbol(&self, id: u64) -> String;
    fn token_balance_of(&self, id: u64, owner: Address) -> U256;
    fn create_launch(
        &mut self,
        name: String,
        symbol: String,
        price: U256,
        soft_cap: U256,
        hard_cap: U256,
        purchase_limit_per_wallet: U256,
        stable_token: Address,
    ) -> u64;
    fn purchase(&mut self, id: u64, stable_amount: U256) -> U256;
}
