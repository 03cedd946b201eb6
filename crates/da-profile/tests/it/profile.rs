use crate::utils::{MockChain, tx};
use da_profile::{ProfileError, ProfileRequest, SamplingProgress, profile};
use serde_json::json;

#[tokio::test]
async fn empty_calldata_is_not_counted() {
    let chain = MockChain::new(1, 10).with_block(10, [tx("0x")]);
    let request = ProfileRequest::new(1, 1).unwrap();
    let result = profile(&chain, request, &mut ()).await.unwrap();

    assert_eq!(result.total_txs, 1);
    assert_eq!(result.txs_with_calldata, 0);
    assert_eq!(result.txs_with_calldata_ratio, 0.0);
    assert_eq!(result.calldata_bytes_stats.max, 0);
    assert_eq!(result.intrinsic_gas_estimate_stats.max, 0);
}

#[tokio::test]
async fn measures_calldata_and_gas() {
    let chain = MockChain::new(1, 10).with_block(10, [tx("0x1234")]);
    let request = ProfileRequest::new(1, 1).unwrap();
    let result = profile(&chain, request, &mut ()).await.unwrap();

    assert_eq!(result.txs_with_calldata, 1);
    assert_eq!(result.txs_with_calldata_ratio, 1.0);
    assert_eq!(result.calldata_bytes_stats.min, 2);
    assert_eq!(result.intrinsic_gas_estimate_stats.min, 20);
    assert_eq!(result.intrinsic_gas_estimate_stats.avg, 20.0);
}

#[tokio::test]
async fn odd_hex_length_rounds_down() {
    let chain = MockChain::new(1, 10).with_block(10, [tx("0xabc")]);
    let request = ProfileRequest::new(1, 1).unwrap();
    let result = profile(&chain, request, &mut ()).await.unwrap();
    assert_eq!(result.calldata_bytes_stats.max, 1);
}

#[tokio::test]
async fn aggregates_across_blocks() {
    // 5, 10, 15, 20 and 25 bytes spread over the sampled blocks
    let chain = MockChain::new(10, 100)
        .with_block(100, [tx(&format!("0x{}", "ab".repeat(5))), tx(&format!("0x{}", "ab".repeat(10)))])
        .with_block(98, [tx(&format!("0x{}", "ab".repeat(15)))])
        .with_block(96, [tx(&format!("0x{}", "ab".repeat(20))), tx(&format!("0x{}", "ab".repeat(25)))])
        .with_block(99, [tx("0xffff")]);
    let request = ProfileRequest::new(5, 2).unwrap();
    let result = profile(&chain, request, &mut ()).await.unwrap();

    assert_eq!(result.network, "Optimism");
    assert_eq!(result.chain_id, 10);
    assert_eq!((result.head_block, result.oldest_block), (100, 96));
    assert_eq!((result.sampled_blocks, result.step), (3, 2));
    assert_eq!(result.total_txs, 5);

    let stats = result.calldata_bytes_stats;
    assert_eq!((stats.min, stats.max), (5, 25));
    assert_eq!(stats.avg, 15.0);
    assert_eq!(stats.p50, 15.0);
    assert_eq!(stats.p90, 25.0);
    assert_eq!(stats.p99, 25.0);
}

#[tokio::test]
async fn visits_blocks_newest_first() {
    let chain = MockChain::new(1, 100);
    let request = ProfileRequest::new(5, 2).unwrap();
    let result = profile(&chain, request, &mut ()).await.unwrap();

    assert_eq!(result.sampled_blocks, 3);
    assert_eq!(result.oldest_block, 96);
    assert_eq!(chain.block_queries(), 3);
    assert_eq!(result.txs_with_calldata_ratio, 0.0);
    assert_eq!(result.calldata_bytes_stats.avg, 0.0);
}

#[tokio::test]
async fn retrieval_failure_aborts_run() {
    let chain = MockChain::new(1, 100).with_block(100, [tx("0x12")]).failing_at(98);
    let request = ProfileRequest::new(5, 2).unwrap();
    let mut progress = Vec::<SamplingProgress>::new();
    let err = profile(&chain, request, &mut progress).await.unwrap_err();

    assert!(matches!(err, ProfileError::Retrieval { number: 98, .. }), "{err:?}");
    assert!(err.to_string().contains("98"));
    // the block after the failing one is never requested
    assert_eq!(chain.block_queries(), 2);
    assert!(progress.is_empty());
}

#[tokio::test]
async fn connectivity_failure_before_sampling() {
    let chain = MockChain::new(1, 100).unreachable();
    let request = ProfileRequest::new(5, 1).unwrap();
    let err = profile(&chain, request, &mut ()).await.unwrap_err();

    assert!(matches!(err, ProfileError::Connectivity(_)), "{err:?}");
    assert_eq!(chain.block_queries(), 0);
}

#[tokio::test]
async fn pinned_head_skips_tip_query() {
    let chain = MockChain::new(1, 1_000).with_block(50, [tx("0x00")]);
    let request = ProfileRequest::new(1, 1).unwrap().with_head(Some(50));
    let result = profile(&chain, request, &mut ()).await.unwrap();

    assert_eq!(chain.tip_queries(), 0);
    assert_eq!(result.head_block, 50);
    assert_eq!(result.total_txs, 1);
    assert_eq!(result.intrinsic_gas_estimate_stats.max, 4);
}

#[tokio::test]
async fn window_clamped_at_genesis() {
    let chain = MockChain::new(1, 3);
    let request = ProfileRequest::new(256, 1).unwrap();
    let result = profile(&chain, request, &mut ()).await.unwrap();

    assert_eq!(result.oldest_block, 0);
    assert_eq!(result.sampled_blocks, 4);
}

#[tokio::test]
async fn reports_progress_every_sixteen_blocks() {
    let chain = MockChain::new(1, 100).with_block(90, [tx("0x12"), tx("0x")]);
    let request = ProfileRequest::new(40, 1).unwrap();
    let mut progress = Vec::<SamplingProgress>::new();
    let result = profile(&chain, request, &mut progress).await.unwrap();

    assert_eq!(result.sampled_blocks, 40);
    assert_eq!(
        progress,
        [
            SamplingProgress { block: 85, sampled_blocks: 16, total_txs: 2 },
            SamplingProgress { block: 69, sampled_blocks: 32, total_txs: 2 },
        ]
    );
}

#[tokio::test]
async fn ratio_stays_within_bounds() {
    let chain = MockChain::new(1, 10).with_block(
        10,
        [
            tx("0x12"),
            tx("0x"),
            json!({ "data": "0xdead" }),
            json!({ "input": null }),
            json!("0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b"),
            json!({ "input": "" , "data": "0x01" }),
        ],
    );
    let request = ProfileRequest::new(1, 1).unwrap();
    let result = profile(&chain, request, &mut ()).await.unwrap();

    assert_eq!(result.total_txs, 6);
    assert_eq!(result.txs_with_calldata, 3);
    assert_eq!(result.txs_with_calldata_ratio, 0.5);
    assert!((0.0..=1.0).contains(&result.txs_with_calldata_ratio));
}
