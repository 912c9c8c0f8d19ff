//! Launchpad module: IDO-style token launches
//!
//! This module provides:
//! - LaunchFactory: registers launches and indexes them by creator
//! - Token: CEP-18 token with restricted minting (the launch template)
//! - StableToken: payment asset for launch purchases

pub mod errors;
pub mod token;
pub mod stable_token;
pub mod launch_factory;

#[cfg(test)]
mod working_tests;

pub use errors::*;
pub use token::*;
pub use stable_token::*;
pub use launch_factory::*;
