//! The profile record and the JSON document wrapping it.

use crate::{
    sampler::{BlockRange, SamplingOutcome},
    stats::PercentileStats,
};
use chrono::{DateTime, Utc};
use da_profile_common::{calc, network_name};
use serde::{Deserialize, Serialize};

/// Decimal places kept for [`ProfileResult::txs_with_calldata_ratio`].
pub const RATIO_DECIMALS: u32 = 4;

/// Decimal places kept for [`ProfileResult::elapsed_sec`].
pub const ELAPSED_DECIMALS: u32 = 3;

/// Value of the `mode` key of the output document.
pub const REPORT_MODE: &str = "da_profile";

/// Format of the `generatedAtUtc` key of the output document.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The data-availability profile of one sampling run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResult {
    pub chain_id: u64,
    pub network: String,
    pub head_block: u64,
    pub oldest_block: u64,
    pub sampled_blocks: u64,
    pub step: u64,
    pub total_txs: u64,
    pub txs_with_calldata: u64,
    /// `txs_with_calldata / total_txs`, or `0.0` without transactions.
    pub txs_with_calldata_ratio: f64,
    pub calldata_bytes_stats: PercentileStats,
    pub intrinsic_gas_estimate_stats: PercentileStats,
    /// Duration of the sampling pass alone, in seconds.
    pub elapsed_sec: f64,
}

impl ProfileResult {
    /// Assembles the result of sampling `range` on chain `chain_id`.
    pub fn build(chain_id: u64, range: &BlockRange, outcome: &SamplingOutcome) -> Self {
        Self {
            chain_id,
            network: network_name(chain_id),
            head_block: range.head(),
            oldest_block: range.oldest(),
            sampled_blocks: outcome.sampled_blocks,
            step: range.step(),
            total_txs: outcome.total_txs,
            txs_with_calldata: outcome.txs_with_calldata,
            txs_with_calldata_ratio: calc::ratio(
                outcome.txs_with_calldata,
                outcome.total_txs,
                RATIO_DECIMALS,
            ),
            calldata_bytes_stats: outcome.calldata_bytes.stats(),
            intrinsic_gas_estimate_stats: outcome.intrinsic_gas.stats(),
            elapsed_sec: calc::round_to(outcome.elapsed.as_secs_f64(), ELAPSED_DECIMALS),
        }
    }
}

/// The document printed on stdout.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub mode: &'static str,
    pub generated_at_utc: String,
    pub data: ProfileResult,
}

impl ProfileReport {
    /// Wraps `data`, stamped with `generated_at`.
    pub fn new(data: ProfileResult, generated_at: DateTime<Utc>) -> Self {
        Self {
            mode: REPORT_MODE,
            generated_at_utc: generated_at.format(TIMESTAMP_FORMAT).to_string(),
            data,
        }
    }

    /// Serializes the report with every object's keys sorted.
    ///
    /// The compact form has no whitespace; the pretty form indents by two spaces.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        let mut value = serde_json::to_value(self)?;
        value.sort_all_objects();
        if pretty { serde_json::to_string_pretty(&value) } else { serde_json::to_string(&value) }
    }
}
