//! Commonly used constants.

use std::time::Duration;

/// The default timeout for a single RPC request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);

/// Number of sampled blocks between two progress notifications.
pub const PROGRESS_INTERVAL: u64 = 16;

/// The placeholder API key shipped in the default RPC endpoint.
pub const PLACEHOLDER_API_KEY: &str = "your_api_key";
