use crate::{
    ChainClient, ProfileReport, ProfileRequest, ProfileResult, RpcChainClient,
    opts::DaProfile,
    profile,
    sampler::{BlockRange, ProgressObserver, SamplingProgress},
};
use chrono::Utc;
use clap::Parser;
use da_profile_cli::{handler, utils, utils::LoadConfig};
use da_profile_common::{network_name, shell};
use eyre::{Result, WrapErr};
use std::time::Instant;

/// Run the `da-profile` command-line interface.
pub fn run() -> Result<()> {
    setup();

    let args = DaProfile::parse();
    args.shell.set_global_shell();
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build the tokio runtime")?
        .block_on(run_command(args))
}

/// Setup the global logger and other utilities.
pub fn setup() {
    handler::install();
    utils::load_dotenv();
    utils::subscriber();
}

/// Profile the configured chain and print the report.
pub async fn run_command(args: DaProfile) -> Result<()> {
    let config = args.load_config()?;
    if config.has_placeholder_rpc_url() {
        sh_warn!(
            "RPC_URL is not set and the default RPC endpoint still uses a placeholder key. \
             Set RPC_URL or pass --rpc."
        )?;
    }
    let request = ProfileRequest::try_from(&config)?;

    sh_eprintln!("da-profile run at UTC {}", Utc::now().format(crate::report::TIMESTAMP_FORMAT))?;
    sh_eprintln!("Using RPC endpoint: {}", config.rpc_url)?;

    let client = RpcChainClient::from_config(&config)?;
    log_connection(&client).await;

    let result = profile(&client, request, &mut ShellProgress).await?;

    if !args.no_human {
        print_summary(&result)?;
    }

    let report = ProfileReport::new(result, Utc::now());
    sh_println!("{}", report.to_json(args.pretty)?)?;
    Ok(())
}

/// Reports the network behind the endpoint and how long it took to reach it.
///
/// Failures are only logged here; the profiling run reports them as fatal.
async fn log_connection<C: ChainClient>(client: &C) {
    let started = Instant::now();
    let chain_id = client.chain_id().await;
    let tip = client.current_block_number().await;
    let latency = started.elapsed().as_secs_f64();
    let _ = match (chain_id, tip) {
        (Ok(chain_id), Ok(tip)) => sh_eprintln!(
            "Connected to {} (chainId {chain_id}, tip={tip}) in {latency:.2}s",
            network_name(chain_id)
        ),
        (Err(err), _) | (_, Err(err)) => {
            debug!(%err, "failed to query chain info");
            Ok(())
        }
    };
}

fn print_summary(result: &ProfileResult) -> Result<()> {
    sh_eprintln!(
        "{} (chainId {}) blocks [{}, {}] sampled={} step={}",
        result.network,
        result.chain_id,
        result.oldest_block,
        result.head_block,
        result.sampled_blocks,
        result.step
    )?;
    sh_eprintln!(
        "totalTxs={} txsWithCalldata={} ratio={}",
        result.total_txs,
        result.txs_with_calldata,
        result.txs_with_calldata_ratio
    )?;
    if shell::is_verbose() {
        for (name, stats) in [
            ("calldata bytes", &result.calldata_bytes_stats),
            ("intrinsic gas", &result.intrinsic_gas_estimate_stats),
        ] {
            sh_eprintln!(
                "{name}: min={} max={} avg={} p50={} p90={} p99={}",
                stats.min,
                stats.max,
                stats.avg,
                stats.p50,
                stats.p90,
                stats.p99
            )?;
        }
    }
    sh_eprintln!("Elapsed: {}s", result.elapsed_sec)?;
    Ok(())
}

/// Prints sampling progress to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellProgress;

impl ProgressObserver for ShellProgress {
    fn on_start(&mut self, range: &BlockRange) {
        let _ = sh_eprintln!(
            "Sampling data-availability profile from blocks [{}, {}] (step={})...",
            range.oldest(),
            range.head(),
            range.step()
        );
    }

    fn on_progress(&mut self, progress: SamplingProgress) {
        let _ = sh_eprintln!(
            "   At block {} (sampled={}, txs={})",
            progress.block,
            progress.sampled_blocks,
            progress.total_txs
        );
    }
}
