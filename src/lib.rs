//! Launchpad smart contracts for the Casper network
//!
//! This crate provides:
//! - LaunchFactory: the launch registry (create launches, index them by creator)
//! - Token: CEP-18 token with restricted minting, used as the launch template
//! - StableToken: payment asset used to buy into launches
#![cfg_attr(target_arch = "wasm32", no_std)]

pub mod events;
pub mod launchpad;
