//! Configuration errors.

use std::{collections::HashSet, error::Error, fmt};

/// The message shown if the config could not be extracted from the figment.
pub const FAILED_TO_EXTRACT_CONFIG_MSG: &str = "failed to extract da-profile config:";

/// Represents a failed attempt to extract `Config` from a `Figment`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    /// error thrown when extracting the `Config`
    pub(crate) error: figment::Error,
}

impl ExtractConfigError {
    /// Wraps the figment error.
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // figment reports one error per offending key and source, which repeats a lot
        let mut unique = HashSet::with_capacity(self.error.count());
        writeln!(f, "{FAILED_TO_EXTRACT_CONFIG_MSG}")?;
        for err in self.error.clone() {
            let err = err.to_string();
            if unique.insert(err.clone()) {
                writeln!(f, "{err}")?;
            }
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}

/// A configuration that was extracted successfully but cannot drive a run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfigError {
    /// The sampling window is empty.
    #[error("`blocks` must be > 0")]
    ZeroBlocks,
    /// The stride between sampled blocks is zero.
    #[error("`step` must be > 0")]
    ZeroStep,
    /// The request timeout is zero.
    #[error("`timeout` must be > 0 seconds")]
    ZeroTimeout,
}
