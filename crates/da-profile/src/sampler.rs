//! Walks a block range and measures every transaction in it.

use crate::{
    calldata::calldata_bytes,
    client::{ChainClient, TransactionRecord},
    error::ProfileError,
    gas::estimate_intrinsic_gas,
    stats::SampleSet,
};
use da_profile_common::PROGRESS_INTERVAL;
use da_profile_config::InvalidConfigError;
use std::{
    num::NonZeroU64,
    time::{Duration, Instant},
};

/// A window of recent blocks and the stride used to walk it.
///
/// Blocks are visited from `head` downwards: `head`, `head - step`, `head - 2 * step`, ... for
/// as long as the number stays at or above [`oldest`](Self::oldest). The oldest block is not
/// visited unless the stride lands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRange {
    head: u64,
    window_size: NonZeroU64,
    step: NonZeroU64,
}

impl BlockRange {
    /// Creates a range of `window_size` blocks ending at `head`.
    pub const fn new(head: u64, window_size: NonZeroU64, step: NonZeroU64) -> Self {
        Self { head, window_size, step }
    }

    /// Creates a range from unchecked parameters.
    pub fn try_new(head: u64, window_size: u64, step: u64) -> Result<Self, ProfileError> {
        let window_size = NonZeroU64::new(window_size).ok_or(InvalidConfigError::ZeroBlocks)?;
        let step = NonZeroU64::new(step).ok_or(InvalidConfigError::ZeroStep)?;
        Ok(Self::new(head, window_size, step))
    }

    /// The newest block of the window.
    pub const fn head(&self) -> u64 {
        self.head
    }

    /// The number of blocks in the window.
    pub const fn window_size(&self) -> u64 {
        self.window_size.get()
    }

    /// The stride between two visited blocks.
    pub const fn step(&self) -> u64 {
        self.step.get()
    }

    /// The oldest block of the window, clamped at genesis.
    pub const fn oldest(&self) -> u64 {
        self.head.saturating_sub(self.window_size.get() - 1)
    }

    /// Returns the visited block numbers, newest first.
    pub fn blocks(&self) -> impl Iterator<Item = u64> + use<> {
        let step = usize::try_from(self.step.get()).unwrap_or(usize::MAX);
        (self.oldest()..=self.head).rev().step_by(step)
    }

    /// Returns how many blocks [`blocks`](Self::blocks) yields.
    pub const fn sampled_len(&self) -> u64 {
        (self.head - self.oldest()) / self.step.get() + 1
    }
}

/// A progress notification, see [`ProgressObserver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingProgress {
    /// The block that was just processed.
    pub block: u64,
    /// Blocks processed so far.
    pub sampled_blocks: u64,
    /// Transactions measured so far.
    pub total_txs: u64,
}

/// Receives advisory notifications while a range is sampled.
///
/// Observers cannot influence the result.
pub trait ProgressObserver {
    /// Called once before the first block is fetched.
    fn on_start(&mut self, _range: &BlockRange) {}

    /// Called after every [`PROGRESS_INTERVAL`] sampled blocks.
    fn on_progress(&mut self, progress: SamplingProgress);
}

/// Discards all notifications.
impl ProgressObserver for () {
    fn on_progress(&mut self, _progress: SamplingProgress) {}
}

/// Collects all notifications.
impl ProgressObserver for Vec<SamplingProgress> {
    fn on_progress(&mut self, progress: SamplingProgress) {
        self.push(progress);
    }
}

/// Measurements gathered over one pass of a [`BlockRange`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SamplingOutcome {
    /// Blocks fetched.
    pub sampled_blocks: u64,
    /// Transactions measured.
    pub total_txs: u64,
    /// Transactions with at least one byte of calldata.
    pub txs_with_calldata: u64,
    /// Calldata size of every transaction, in bytes.
    pub calldata_bytes: SampleSet,
    /// Intrinsic gas estimate of every transaction, parallel to `calldata_bytes`.
    pub intrinsic_gas: SampleSet,
    /// Wall-clock duration of the pass.
    pub elapsed: Duration,
}

impl SamplingOutcome {
    /// Measures one transaction.
    pub fn record(&mut self, tx: &TransactionRecord) {
        let bytes = calldata_bytes(tx);
        self.total_txs += 1;
        if bytes > 0 {
            self.txs_with_calldata += 1;
        }
        self.calldata_bytes.push(bytes);
        self.intrinsic_gas.push(estimate_intrinsic_gas(bytes));
    }
}

/// Fetches every block of a [`BlockRange`], one at a time, and measures its transactions.
#[derive(Debug)]
pub struct BlockSampler<'a, C> {
    client: &'a C,
    range: BlockRange,
}

impl<'a, C: ChainClient> BlockSampler<'a, C> {
    pub fn new(client: &'a C, range: BlockRange) -> Self {
        Self { client, range }
    }

    /// Samples the whole range.
    ///
    /// The first block that cannot be fetched aborts the pass and everything measured so far is
    /// dropped.
    pub async fn run<O: ProgressObserver + ?Sized>(
        self,
        observer: &mut O,
    ) -> Result<SamplingOutcome, ProfileError> {
        let Self { client, range } = self;
        observer.on_start(&range);
        debug!(
            oldest = range.oldest(),
            head = range.head(),
            step = range.step(),
            blocks = range.sampled_len(),
            "sampling block range"
        );

        let started = Instant::now();
        let mut outcome = SamplingOutcome::default();
        for number in range.blocks() {
            let block = client
                .block_with_transactions(number)
                .await
                .map_err(|source| ProfileError::Retrieval { number, source })?;
            outcome.sampled_blocks += 1;
            for tx in &block.transactions {
                outcome.record(tx);
            }
            trace!(number, txs = block.transactions.len(), "sampled block");

            if outcome.sampled_blocks % PROGRESS_INTERVAL == 0 {
                observer.on_progress(SamplingProgress {
                    block: number,
                    sampled_blocks: outcome.sampled_blocks,
                    total_txs: outcome.total_txs,
                });
            }
        }
        outcome.elapsed = started.elapsed();

        debug!(
            sampled_blocks = outcome.sampled_blocks,
            total_txs = outcome.total_txs,
            elapsed = ?outcome.elapsed,
            "sampling finished"
        );
        Ok(outcome)
    }
}
