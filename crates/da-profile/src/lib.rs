//! # da-profile
//!
//! Profiles the data-availability footprint of an EVM chain: samples a window of recent blocks,
//! measures the calldata of every transaction, estimates its intrinsic gas and summarizes both
//! as min/max/average/percentiles.
//!
//! ```no_run
//! use da_profile::{ProfileRequest, RpcChainClient, profile};
//! use da_profile_config::Config;
//!
//! # async fn run() -> eyre::Result<()> {
//! let config = Config::load()?;
//! let client = RpcChainClient::from_config(&config)?;
//! let request = ProfileRequest::try_from(&config)?;
//! let result = profile(&client, request, &mut ()).await?;
//! println!("{} txs, {} with calldata", result.total_txs, result.txs_with_calldata);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

#[macro_use]
extern crate da_profile_common;

pub mod args;
pub mod calldata;
pub mod client;
pub mod gas;
pub mod opts;
pub mod profile;
pub mod report;
pub mod sampler;
pub mod stats;

mod error;
pub use error::ProfileError;

pub use calldata::{calldata_bytes, resolve_calldata_field};
pub use client::{Block, ChainClient, ClientError, RpcChainClient, TransactionRecord};
pub use gas::estimate_intrinsic_gas;
pub use profile::{ProfileRequest, profile};
pub use report::{ProfileReport, ProfileResult};
pub use sampler::{BlockRange, BlockSampler, ProgressObserver, SamplingOutcome, SamplingProgress};
pub use stats::{PercentileStats, SampleSet};
