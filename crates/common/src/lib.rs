//! Common utilities for building and using the da-profile tools.

#![warn(missing_docs, unused_crate_dependencies)]

#[macro_use]
pub mod shell;

pub mod calc;
pub mod constants;
pub mod errors;
pub mod network;
pub mod provider;

pub use constants::*;
pub use network::network_name;
pub use provider::*;
