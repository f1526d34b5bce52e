// SPDX-License-Identifier: MIT
// Math Errors

use soroban_sdk::contracterror;

/// Failures of the range arithmetic
///
/// Codes are stable so contracts can surface them unchanged.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MathError {
    /// Caller broke a precondition: price out of bounds, width outside
    /// 1-9999 bps, both amounts zero, or a bad policy parameter
    InvalidInput = 1,
    /// Zero sqrt price passed to a price conversion
    InvalidPrice = 2,
    /// Computed range does not strictly bracket the current price
    InvariantViolation = 3,
    /// Result does not fit in 256 bits
    Overflow = 4,
}
