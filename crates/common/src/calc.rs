//! Commonly used calculations.

/// Returns the mean of the slice, or `0.0` if it is empty.
///
/// The sum is accumulated in a `u128` so it cannot overflow.
#[inline]
pub fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().map(|x| *x as u128).sum::<u128>() as f64 / values.len() as f64
}

/// Rounds `value` to `decimals` places.
///
/// Rounding is applied to the exact binary value through the correctly rounded decimal
/// formatter, so there is no scaling error; exact ties go to the even neighbour.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{value:.prec$}", prec = decimals as usize).parse().unwrap_or(value)
}

/// Returns `numerator / denominator` rounded to `decimals` places, or `0.0` if the denominator
/// is zero.
#[inline]
pub fn ratio(numerator: u64, denominator: u64, decimals: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round_to(numerator as f64 / denominator as f64, decimals)
}

/// Returns the element of a _sorted_ slice at the nearest rank for quantile `q`.
///
/// The rank is `q * (len - 1)` rounded half-to-even; there is no interpolation between
/// neighbouring ranks. `q` is clamped to `[0, 1]`. Returns `None` for an empty slice.
#[inline]
pub fn nearest_rank_sorted(values: &[u64], q: f64) -> Option<u64> {
    match values {
        [] => None,
        [only] => Some(*only),
        _ => {
            let last = values.len() - 1;
            let idx = (q.clamp(0.0, 1.0) * last as f64).round_ties_even() as usize;
            Some(values[idx.min(last)])
        }
    }
}
