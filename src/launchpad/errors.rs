//! Launchpad-specific error types

use odra::prelude::*;

/// Errors that can occur in the launchpad contracts
#[odra::odra_error]
pub enum LaunchpadError {
    /// Caller is not authorized for this operation
    Unauthorized = 20_000,

    /// No launch exists under the given id
    LaunchNotFound = 20_001,

    /// Hard cap is zero or below the soft cap
    InvalidCaps = 20_002,

    /// Per-wallet purchase limit exceeds the hard cap
    InvalidPurchaseLimit = 20_003,

    /// Price must be non-zero
    InvalidPrice = 20_004,

    /// Token name must not be empty
    EmptyName = 20_005,

    /// Symbol must be 1 to 6 bytes
    InvalidSymbol = 20_006,

    /// Symbol is already registered by another launch
    DuplicateSymbol = 20_007,

    /// Launch is not accepting purchases
    LaunchNotActive = 20_008,

    /// Purchase would push the launch past its hard cap
    HardCapReached = 20_009,

    /// Purchase would push the wallet past its per-wallet limit
    PurchaseLimitExceeded = 20_010,

    /// Zero amount not allowed
    ZeroAmount = 20_011,

    /// Insufficient token balance
    InsufficientBalance = 20_012,

    /// Stable token transfer failed
    TransferFailed = 20_013,
}
