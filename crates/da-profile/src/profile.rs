//! Runs a complete profiling pass against a chain.

use crate::{
    client::ChainClient,
    error::ProfileError,
    report::ProfileResult,
    sampler::{BlockRange, BlockSampler, ProgressObserver},
};
use da_profile_config::{Config, InvalidConfigError};
use std::num::NonZeroU64;

/// Validated parameters of a profiling run.
///
/// Built from configuration before the chain is contacted, so bad parameters never cost a
/// request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileRequest {
    window_size: NonZeroU64,
    step: NonZeroU64,
    head: Option<u64>,
}

impl ProfileRequest {
    /// Samples the `window_size` most recent blocks, every `step`-th one.
    pub fn new(window_size: u64, step: u64) -> Result<Self, ProfileError> {
        Ok(Self {
            window_size: NonZeroU64::new(window_size).ok_or(InvalidConfigError::ZeroBlocks)?,
            step: NonZeroU64::new(step).ok_or(InvalidConfigError::ZeroStep)?,
            head: None,
        })
    }

    /// Pins the newest block of the window instead of using the chain tip.
    pub fn with_head(mut self, head: Option<u64>) -> Self {
        self.head = head;
        self
    }

    /// The pinned head, if any.
    pub fn head(&self) -> Option<u64> {
        self.head
    }

    /// The range this request covers once the head is known.
    pub fn range(&self, head: u64) -> BlockRange {
        BlockRange::new(self.head.unwrap_or(head), self.window_size, self.step)
    }
}

impl TryFrom<&Config> for ProfileRequest {
    type Error = ProfileError;

    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self::new(config.blocks, config.step)?.with_head(config.head))
    }
}

/// Profiles the chain behind `client`.
///
/// The chain id is fetched first, then the tip unless the request pins a head, then every block
/// of the range. Any client failure ends the run without a result.
pub async fn profile<C, O>(
    client: &C,
    request: ProfileRequest,
    observer: &mut O,
) -> Result<ProfileResult, ProfileError>
where
    C: ChainClient,
    O: ProgressObserver + ?Sized,
{
    let chain_id = client.chain_id().await.map_err(ProfileError::Connectivity)?;
    let head = match request.head() {
        Some(head) => head,
        None => client.current_block_number().await.map_err(ProfileError::Connectivity)?,
    };
    let range = request.range(head);
    info!(chain_id, oldest = range.oldest(), head = range.head(), step = range.step(), "profiling");

    let outcome = BlockSampler::new(client, range).run(observer).await?;
    Ok(ProfileResult::build(chain_id, &range, &outcome))
}
