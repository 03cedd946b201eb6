//! Calldata size of loosely-typed transaction records.
//!
//! Nodes disagree on the name of the payload field (`input` vs. `data`), and a record may come
//! back without one or with garbage in it. None of that is an error here: anything that does
//! not resolve to a hex string measures as zero bytes.

use crate::client::TransactionRecord;
use serde_json::Value;

/// Payload field names, in lookup order.
pub const CALLDATA_FIELDS: [&str; 2] = ["input", "data"];

/// Returns the raw calldata string of `record`.
///
/// `input` is preferred; `data` is consulted only when `input` is missing or empty (`null`,
/// `""`, `false`, `0`, `[]`, `{}`). A non-empty value of the wrong type wins the lookup and then
/// resolves to `None`, it does not fall through to `data`.
pub fn resolve_calldata_field(record: &TransactionRecord) -> Option<&str> {
    let fields = record.as_value().as_object()?;
    CALLDATA_FIELDS.iter().filter_map(|name| fields.get(*name)).find(|v| is_truthy(v))?.as_str()
}

/// Returns the number of calldata bytes carried by `record`.
///
/// An optional `0x` prefix is stripped and the remaining hex digits are halved, rounding down,
/// so an odd-length string counts one byte less than its nominal size.
pub fn calldata_bytes(record: &TransactionRecord) -> u64 {
    let Some(data) = resolve_calldata_field(record) else { return 0 };
    let digits = data.strip_prefix("0x").unwrap_or(data);
    // characters, not bytes: a stray multi-byte character counts once
    (digits.chars().count() / 2) as u64
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
