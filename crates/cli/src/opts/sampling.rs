use clap::Parser;
use da_profile_config::figment::{
    self, Metadata, Profile,
    value::{Dict, Map},
};
use serde::Serialize;

/// Which blocks to sample.
#[derive(Clone, Debug, Default, Serialize, Parser)]
#[command(next_help_heading = "Sampling options")]
pub struct SamplingOpts {
    /// Number of recent blocks to scan [default: 256].
    #[arg(long, short, value_name = "N")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<u64>,

    /// Sample every Nth block [default: 1].
    #[arg(long, short, value_name = "N")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u64>,

    /// Override the head block [default: the current chain tip].
    #[arg(long, value_name = "BLOCK")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<u64>,
}

impl figment::Provider for SamplingOpts {
    fn metadata(&self) -> Metadata {
        Metadata::named("SamplingOpts")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Map::from([(Profile::Default, self.dict())]))
    }
}

impl SamplingOpts {
    pub fn dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(blocks) = self.blocks {
            dict.insert("blocks".into(), blocks.into());
        }
        if let Some(step) = self.step {
            dict.insert("step".into(), step.into());
        }
        if let Some(head) = self.head {
            dict.insert("head".into(), head.into());
        }
        dict
    }
}
