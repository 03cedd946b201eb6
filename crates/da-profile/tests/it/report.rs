use crate::utils::{MockChain, tx};
use chrono::{TimeZone, Utc};
use da_profile::{ProfileReport, ProfileRequest, profile};
use serde_json::{Value, json};
use similar_asserts::assert_eq;

#[tokio::test]
async fn end_to_end_report() {
    let chain = MockChain::new(1, 20)
        .with_block(20, [tx("0x1234"), tx("0x")])
        .with_block(19, [tx("0xabcdef")]);
    let request = ProfileRequest::new(2, 1).unwrap();
    let result = profile(&chain, request, &mut ()).await.unwrap();
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let json = ProfileReport::new(result, at).to_json(false).unwrap();
    let mut value: Value = serde_json::from_str(&json).unwrap();
    // wall-clock dependent
    assert!(value["data"]["elapsedSec"].as_f64().unwrap() >= 0.0);
    value["data"]["elapsedSec"] = json!(0.0);

    assert_eq!(
        value,
        json!({
            "data": {
                "calldataBytesStats": { "avg": 1.667, "max": 3, "min": 0, "p50": 2.0, "p90": 3.0, "p99": 3.0 },
                "chainId": 1,
                "elapsedSec": 0.0,
                "headBlock": 20,
                "intrinsicGasEstimateStats": { "avg": 14.667, "max": 24, "min": 0, "p50": 20.0, "p90": 24.0, "p99": 24.0 },
                "network": "Ethereum Mainnet",
                "oldestBlock": 19,
                "sampledBlocks": 2,
                "step": 1,
                "totalTxs": 3,
                "txsWithCalldata": 2,
                "txsWithCalldataRatio": 0.6667,
            },
            "generatedAtUtc": "2025-01-02 03:04:05",
            "mode": "da_profile",
        })
    );
}

#[tokio::test]
async fn failed_run_produces_no_report() {
    let chain = MockChain::new(1, 20).with_block(20, [tx("0x1234")]).failing_at(19);
    let request = ProfileRequest::new(2, 1).unwrap();
    assert!(profile(&chain, request, &mut ()).await.is_err());
}
