//! In-memory chain used by the integration tests.

use async_trait::async_trait;
use da_profile::{Block, ChainClient, ClientError, TransactionRecord};
use serde_json::{Value, json};
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicU64, Ordering},
};

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
pub struct Unreachable;

/// A chain whose blocks live in memory.
#[derive(Debug, Default)]
pub struct MockChain {
    pub chain_id: u64,
    pub tip: u64,
    pub blocks: BTreeMap<u64, Vec<TransactionRecord>>,
    pub failing_block: Option<u64>,
    pub unreachable: bool,
    pub tip_queries: AtomicU64,
    pub block_queries: AtomicU64,
}

impl MockChain {
    /// Chain `chain_id` with empty blocks `0..=tip`.
    pub fn new(chain_id: u64, tip: u64) -> Self {
        Self {
            chain_id,
            tip,
            blocks: (0..=tip).map(|n| (n, Vec::new())).collect(),
            ..Default::default()
        }
    }

    pub fn with_block(mut self, number: u64, txs: impl IntoIterator<Item = Value>) -> Self {
        self.blocks.insert(number, txs.into_iter().map(TransactionRecord::new).collect());
        self
    }

    pub fn failing_at(mut self, number: u64) -> Self {
        self.failing_block = Some(number);
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn tip_queries(&self) -> u64 {
        self.tip_queries.load(Ordering::Relaxed)
    }

    pub fn block_queries(&self) -> u64 {
        self.block_queries.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ChainClient for MockChain {
    async fn chain_id(&self) -> Result<u64, ClientError> {
        if self.unreachable {
            return Err(Unreachable.into());
        }
        Ok(self.chain_id)
    }

    async fn current_block_number(&self) -> Result<u64, ClientError> {
        self.tip_queries.fetch_add(1, Ordering::Relaxed);
        if self.unreachable {
            return Err(Unreachable.into());
        }
        Ok(self.tip)
    }

    async fn block_with_transactions(&self, number: u64) -> Result<Block, ClientError> {
        self.block_queries.fetch_add(1, Ordering::Relaxed);
        if self.unreachable || self.failing_block == Some(number) {
            return Err(Unreachable.into());
        }
        let transactions = self.blocks.get(&number).cloned().ok_or("block not found")?;
        Ok(Block { number, transactions })
    }
}

/// A transaction carrying `input`.
pub fn tx(input: &str) -> Value {
    json!({ "hash": "0x01", "input": input })
}
