//! Summary statistics over integer samples.

use da_profile_common::calc::{mean, nearest_rank_sorted, round_to};
use serde::{Deserialize, Serialize};

/// Decimal places kept for the average and the percentiles.
pub const STATS_DECIMALS: u32 = 3;

/// An insertion-ordered collection of non-negative integer samples.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleSet {
    values: Vec<u64>,
}

impl SampleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample.
    #[inline]
    pub fn push(&mut self, value: u64) {
        self.values.push(value);
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the samples in insertion order.
    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    /// Returns the summary statistics of the samples.
    pub fn stats(&self) -> PercentileStats {
        PercentileStats::from_samples(&self.values)
    }
}

impl Extend<u64> for SampleSet {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl FromIterator<u64> for SampleSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

/// Summary of a [`SampleSet`].
///
/// `min` and `max` are exact sample values and serialize as JSON integers (`10`, never
/// `10.0`); `avg` and the percentiles are rounded to [`STATS_DECIMALS`]
/// places. Percentiles use the nearest rank: the sample at index `round(q * (n - 1))` of the
/// sorted set, with ties rounded to even and no interpolation. All fields are zero for an empty
/// set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentileStats {
    pub min: u64,
    pub max: u64,
    pub avg: f64,
    pub p50: f64,
    pub p90: f64,
    pub p99: f64,
}

impl PercentileStats {
    /// Computes the statistics of `samples`, in any order.
    pub fn from_samples(samples: &[u64]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        Self::from_sorted(&sorted)
    }

    /// Computes the statistics of an ascending `sorted` slice.
    pub fn from_sorted(sorted: &[u64]) -> Self {
        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return Self::default();
        };
        let percentile =
            |q| round_to(nearest_rank_sorted(sorted, q).unwrap_or_default() as f64, STATS_DECIMALS);

        Self {
            min,
            max,
            avg: round_to(mean(sorted), STATS_DECIMALS),
            p50: percentile(0.50),
            p90: percentile(0.90),
            p99: percentile(0.99),
        }
    }
}
