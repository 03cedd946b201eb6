//! Access to the chain being profiled.

use alloy_provider::Provider;
use alloy_rpc_types::BlockNumberOrTag;
use async_trait::async_trait;
use da_profile_common::{HttpProvider, ProviderBuilder};
use da_profile_config::Config;
use serde::Deserialize;
use serde_json::Value;

/// Error returned by a [`ChainClient`].
pub type ClientError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The chain operations the profiler needs.
///
/// Implementations own transport concerns such as timeouts; callers neither retry nor catch
/// failures.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Returns the EIP-155 chain id.
    async fn chain_id(&self) -> Result<u64, ClientError>;

    /// Returns the number of the most recent block.
    async fn current_block_number(&self) -> Result<u64, ClientError>;

    /// Returns block `number` with full transaction bodies.
    async fn block_with_transactions(&self, number: u64) -> Result<Block, ClientError>;
}

/// A block and its transactions, in the order the node returned them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub number: u64,
    pub transactions: Vec<TransactionRecord>,
}

/// A transaction exactly as the node returned it.
///
/// No schema is imposed: the record is only ever inspected field by field, see
/// [`resolve_calldata_field`](crate::calldata::resolve_calldata_field).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TransactionRecord(Value);

impl TransactionRecord {
    /// Wraps a raw JSON transaction.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the raw JSON.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for TransactionRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Returned when the node has no block at the requested height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("block {0} not found")]
pub struct BlockNotFound(pub u64);

#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(default)]
    transactions: Option<Vec<TransactionRecord>>,
}

/// A [`ChainClient`] backed by an alloy [`Provider`].
#[derive(Clone, Debug)]
pub struct RpcChainClient<P = HttpProvider> {
    provider: P,
}

impl RpcChainClient {
    /// Connects to the configured endpoint over HTTP.
    ///
    /// No request is sent until the first call.
    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        let provider =
            ProviderBuilder::new(&config.rpc_url).timeout(config.request_timeout()).build()?;
        Ok(Self::new(provider))
    }
}

impl<P: Provider> RpcChainClient<P> {
    /// Wraps an existing provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider> ChainClient for RpcChainClient<P> {
    async fn chain_id(&self) -> Result<u64, ClientError> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn current_block_number(&self) -> Result<u64, ClientError> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn block_with_transactions(&self, number: u64) -> Result<Block, ClientError> {
        // fetched raw so malformed transactions reach the measurer instead of failing decoding
        let block: Option<RawBlock> = self
            .provider
            .raw_request("eth_getBlockByNumber".into(), (BlockNumberOrTag::Number(number), true))
            .await?;
        let block = block.ok_or(BlockNotFound(number))?;
        Ok(Block { number, transactions: block.transactions.unwrap_or_default() })
    }
}
