// SPDX-License-Identifier: MIT
// Relative Tolerance Comparison

use crate::constants::{DEFAULT_EPS_DECIMALS, DEFAULT_ZERO_THRESHOLD};
use crate::wide::{widen, U256, U512};

/// `a ~ b` when `|a - b| * decimals / a < eps`
///
/// If exactly one side is zero, the other must be at most `zero_threshold`.
pub fn eps_equal(a: U256, b: U256, eps: u64, decimals: u64, zero_threshold: u64) -> bool {
    if a == b {
        return true;
    }
    if a.is_zero() {
        return b <= U256::from(zero_threshold);
    }
    if b.is_zero() {
        return a <= U256::from(zero_threshold);
    }

    let diff = if a > b { a - b } else { b - a };
    widen(diff) * U512::from(decimals) / widen(a) < U512::from(eps)
}

/// Relative difference below `eps` hundredths of a percent
pub fn within_bps(a: U256, b: U256, eps: u64) -> bool {
    eps_equal(a, b, eps, DEFAULT_EPS_DECIMALS, DEFAULT_ZERO_THRESHOLD)
}
