use clap::Parser;
use da_profile_cli::{
    opts::{RpcOpts, SamplingOpts, ShellOptions},
    utils::LoadConfig,
};
use da_profile_config::{Config, figment::Figment};

/// Profile L1 data-availability (calldata bytes and intrinsic gas) for ZK/soundness systems.
///
/// Samples recent blocks, measures the calldata of every transaction and prints a JSON summary
/// on stdout. Progress and a human readable summary go to stderr.
#[derive(Clone, Debug, Parser)]
#[command(name = "da-profile", version)]
pub struct DaProfile {
    #[command(flatten)]
    pub rpc: RpcOpts,

    #[command(flatten)]
    pub sampling: SamplingOpts,

    /// Pretty-print the JSON document.
    #[arg(long)]
    pub pretty: bool,

    /// Do not print the human readable summary.
    #[arg(long)]
    pub no_human: bool,

    #[command(flatten)]
    pub shell: ShellOptions,
}

impl LoadConfig for DaProfile {
    fn figment(&self) -> Figment {
        Config::figment().merge(&self.rpc).merge(&self.sampling)
    }
}
