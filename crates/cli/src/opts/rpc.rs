use clap::Parser;
use da_profile_config::figment::{
    self, Metadata, Profile,
    value::{Dict, Map},
};
use serde::Serialize;

/// RPC endpoint options.
#[derive(Clone, Debug, Default, Serialize, Parser)]
#[command(next_help_heading = "RPC options")]
pub struct RpcOpts {
    /// The RPC endpoint URL [default: $RPC_URL, then the config file].
    #[arg(long = "rpc", visible_alias = "rpc-url", value_name = "URL")]
    #[serde(rename = "rpc_url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Timeout for a single RPC request, in seconds.
    #[arg(long, value_name = "SECS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl figment::Provider for RpcOpts {
    fn metadata(&self) -> Metadata {
        Metadata::named("RpcOpts")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Map::from([(Profile::Default, self.dict())]))
    }
}

impl RpcOpts {
    pub fn dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(url) = &self.url {
            dict.insert("rpc_url".into(), url.clone().into());
        }
        if let Some(timeout) = self.timeout {
            dict.insert("timeout".into(), timeout.into());
        }
        dict
    }
}
