// Constants module for the connector math package:
// - Grouped by functionality
// - Wide constants are built from little-endian 64-bit limbs

use crate::wide::{U256, U512};

// ============================================================
// FIXED-POINT CONSTANTS (Q64.96 sqrt prices)
// ============================================================

/// Number of fractional bits in a sqrt price
pub const RESOLUTION: u32 = 96;

/// 2^96, the sqrt price of a 1:1 pool
pub const Q96: U256 = U256([0, 1 << 32, 0, 0]);

/// 2^192, the scale of a squared sqrt price
pub const Q192: U512 = U512([0, 0, 0, 1, 0, 0, 0, 0]);

// ============================================================
// SQRT PRICE BOUNDS
// ============================================================

/// Minimum sqrt price a pool can report (at tick -887272)
pub const MIN_SQRT_RATIO: U256 = U256([4_295_128_739, 0, 0, 0]);

/// Maximum sqrt price a pool can report (at tick 887272), exclusive
/// Equals 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_RATIO: U256 = U256([
    0x5d95_1d52_6398_8d26,
    0xefd1_fc6a_5064_8849,
    0xfffd_8963,
    0,
]);

// ============================================================
// WIDTH CONSTANTS
// ============================================================

/// Basis point denominator (100% = 10000 bps)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Narrowest band that can be requested
pub const MIN_WIDTH_BPS: u32 = 1;

/// Widest band that can be requested
/// 10000 bps would push the lower bound to zero
pub const MAX_WIDTH_BPS: u32 = 9_999;

// ============================================================
// SPLIT POLICY CONSTANTS
// ============================================================

/// Share of the band each leg gets when the split is symmetric
pub const HALF_SHARE_BPS: u64 = BPS_DENOMINATOR / 2;

/// Smallest share of the band the amount-weighted policy gives either leg
pub const DEFAULT_MIN_LEG_SHARE_BPS: u32 = 1_000;

// ============================================================
// TOLERANCE CONSTANTS
// ============================================================

/// Default scale for relative comparisons (eps is in 1/10000 units)
pub const DEFAULT_EPS_DECIMALS: u64 = 10_000;

/// Values at or below this are treated as zero when compared to zero
pub const DEFAULT_ZERO_THRESHOLD: u64 = 10;
