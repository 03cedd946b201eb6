//! # da-profile-config
//!
//! Layered configuration for the da-profile tools.
//!
//! Values are resolved with [`figment`], from lowest to highest precedence:
//!
//! 1. built-in defaults ([`Config::default`]),
//! 2. the TOML file `da-profile.toml` in the working directory (or the file named by
//!    `DA_PROFILE_CONFIG`),
//! 3. the `RPC_URL` environment variable,
//! 4. `DA_PROFILE_*` environment variables, e.g. `DA_PROFILE_BLOCKS=64`,
//! 5. whatever the caller merges on top, typically command-line options.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use da_profile_common::{PLACEHOLDER_API_KEY, REQUEST_TIMEOUT};
use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod error;
pub use error::{ExtractConfigError, FAILED_TO_EXTRACT_CONFIG_MSG, InvalidConfigError};

pub use figment;

/// da-profile configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON-RPC endpoint of the chain to profile.
    pub rpc_url: String,
    /// Number of most recent blocks covered by the sampling window.
    pub blocks: u64,
    /// Sample every `step`-th block of the window.
    pub step: u64,
    /// Pins the newest block of the window instead of using the chain tip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<u64>,
    /// Per-request timeout, in seconds.
    pub timeout: u64,
}

impl Config {
    /// The default name of the config file.
    pub const FILE_NAME: &'static str = "da-profile.toml";

    /// Environment variable that overrides the config file path.
    pub const FILE_ENV: &'static str = "DA_PROFILE_CONFIG";

    /// Prefix of the environment variables mapped onto config keys.
    pub const ENV_PREFIX: &'static str = "DA_PROFILE_";

    /// RPC endpoint used when nothing else is configured.
    pub const DEFAULT_RPC_URL: &'static str = "https://mainnet.infura.io/v3/your_api_key";

    /// Default sampling window.
    pub const DEFAULT_BLOCKS: u64 = 256;

    /// Default stride.
    pub const DEFAULT_STEP: u64 = 1;

    /// Returns the layered [`Figment`] without any caller-supplied overrides.
    pub fn figment() -> Figment {
        Figment::from(Self::default())
            .merge(Toml::file(Env::var_or(Self::FILE_ENV, Self::FILE_NAME)))
            .merge(Env::raw().only(&["RPC_URL"]))
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(&["CONFIG"]))
    }

    /// Loads the configuration from defaults, the config file and the environment.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment())
    }

    /// Attempts to extract a `Config` from `provider`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use da_profile_config::{Config, figment::providers::Serialized};
    ///
    /// let figment = Config::figment().merge(Serialized::default("blocks", 32));
    /// let config = Config::try_from(figment).unwrap();
    /// assert_eq!(config.blocks, 32);
    /// ```
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        trace!("load config with provider: {:?}", provider.metadata());
        Figment::from(provider).extract::<Self>().map_err(ExtractConfigError::new)
    }

    /// Checks that the configuration can drive a sampling run.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.blocks == 0 {
            return Err(InvalidConfigError::ZeroBlocks);
        }
        if self.step == 0 {
            return Err(InvalidConfigError::ZeroStep);
        }
        if self.timeout == 0 {
            return Err(InvalidConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Returns `true` if the RPC URL still carries the placeholder API key.
    pub fn has_placeholder_rpc_url(&self) -> bool {
        self.rpc_url.contains(PLACEHOLDER_API_KEY)
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: Self::DEFAULT_RPC_URL.to_string(),
            blocks: Self::DEFAULT_BLOCKS,
            step: Self::DEFAULT_STEP,
            head: None,
            timeout: REQUEST_TIMEOUT.as_secs(),
        }
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("da-profile defaults")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}
