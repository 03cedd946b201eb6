use crate::client::ClientError;
use da_profile_config::InvalidConfigError;

/// A fatal profiling error. No partial result survives any of these.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The sampling parameters are unusable. Raised before the chain is contacted.
    #[error("invalid configuration: {0}")]
    Config(#[from] InvalidConfigError),
    /// The chain could not be reached or did not report its identity or tip.
    #[error("failed to query the chain: {0}")]
    Connectivity(#[source] ClientError),
    /// A block in the sampling window could not be fetched.
    #[error("failed to fetch block {number}: {source}")]
    Retrieval {
        number: u64,
        #[source]
        source: ClientError,
    },
}
