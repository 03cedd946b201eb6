//! Intrinsic gas estimate for a transaction's calldata.
//!
//! The real charge depends on every byte's value (4 gas per zero byte, 16 per non-zero byte).
//! Only the length is known here, so the estimate assumes half of the payload is zero bytes,
//! giving the larger half to the zero bytes when the length is odd. Use it for profiling, never
//! for gas accounting.

/// Gas charged per zero byte of calldata.
pub const TX_DATA_ZERO_GAS: u64 = 4;

/// Gas charged per non-zero byte of calldata.
pub const TX_DATA_NON_ZERO_GAS: u64 = 16;

/// Returns the approximate intrinsic gas for `byte_length` bytes of calldata.
///
/// `0` bytes cost `0` gas.
#[inline]
pub fn estimate_intrinsic_gas(byte_length: u64) -> u64 {
    if byte_length == 0 {
        return 0;
    }
    let non_zero_bytes = byte_length / 2;
    let zero_bytes = byte_length - non_zero_bytes;
    zero_bytes
        .saturating_mul(TX_DATA_ZERO_GAS)
        .saturating_add(non_zero_bytes.saturating_mul(TX_DATA_NON_ZERO_GAS))
}
