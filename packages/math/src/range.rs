// SPDX-License-Identifier: MIT
// Price Range Selection
//
// A band [p_l, p_u] around the current price p has relative width
//     w = (p_u - p_l) / (p_u + p_l)
// With legs p_l = p(1 - a), p_u = p(1 + b) kept in the ratio b / a = s_u / s_l,
// solving for w gives (D = 10000, W = width in bps):
//     den = D^2 - W (s_u - s_l)
//     p_l = p D (D - W) / den
//     p_u = p D (D + W) / den
// Equal shares reduce to p(1 - w) and p(1 + w).

use crate::constants::{
    BPS_DENOMINATOR, DEFAULT_MIN_LEG_SHARE_BPS, HALF_SHARE_BPS, MAX_SQRT_RATIO, MAX_WIDTH_BPS,
    MIN_SQRT_RATIO, MIN_WIDTH_BPS,
};
use crate::error::MathError;
use crate::price::{price_x192, sqrt_price_from_x192};
use crate::wide::{widen, U256, U512};

// ============================================================
// TYPES
// ============================================================

/// Token amounts the caller intends to provide, used as relative weights
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AmountPair {
    pub amount0: U256,
    pub amount1: U256,
}

impl AmountPair {
    pub fn new(amount0: U256, amount1: U256) -> Self {
        Self { amount0, amount1 }
    }

    pub fn is_empty(&self) -> bool {
        self.amount0.is_zero() && self.amount1.is_zero()
    }
}

/// How the band is divided between the downside and upside legs
/// (in bps, summing to 10000)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LegShares {
    pub lower_bps: u64,
    pub upper_bps: u64,
}

impl LegShares {
    pub const SYMMETRIC: LegShares = LegShares {
        lower_bps: HALF_SHARE_BPS,
        upper_bps: HALF_SHARE_BPS,
    };

    fn is_valid(&self) -> bool {
        self.lower_bps > 0
            && self.upper_bps > 0
            && self.lower_bps.checked_add(self.upper_bps) == Some(BPS_DENOMINATOR)
    }
}

/// Output band in the sqrt price domain
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PriceRange {
    pub sqrt_price_x96_lower: U256,
    pub sqrt_price_x96_upper: U256,
}

// ============================================================
// SPLIT POLICIES
// ============================================================

/// Decides how a requested width is split between the two legs
pub trait SplitPolicy {
    fn leg_shares(&self, amounts: &AmountPair) -> Result<LegShares, MathError>;
}

/// Half of the band on each side, whatever the amounts
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Symmetric;

impl SplitPolicy for Symmetric {
    fn leg_shares(&self, _amounts: &AmountPair) -> Result<LegShares, MathError> {
        Ok(LegShares::SYMMETRIC)
    }
}

/// Leans the band toward the token held in excess
///
/// The upside leg gets `amount0 / (amount0 + amount1)` of the band: more
/// token0 leaves more room for the price to rise, more token1 more room to
/// fall. Neither leg gets less than `min_leg_share_bps`. Equal raw amounts
/// always split evenly.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AmountWeighted {
    pub min_leg_share_bps: u32,
}

impl Default for AmountWeighted {
    fn default() -> Self {
        Self {
            min_leg_share_bps: DEFAULT_MIN_LEG_SHARE_BPS,
        }
    }
}

impl SplitPolicy for AmountWeighted {
    fn leg_shares(&self, amounts: &AmountPair) -> Result<LegShares, MathError> {
        let min_share = self.min_leg_share_bps as u64;
        if min_share == 0 || min_share > HALF_SHARE_BPS {
            return Err(MathError::InvalidInput);
        }
        if amounts.is_empty() {
            return Err(MathError::InvalidInput);
        }

        let amount0 = widen(amounts.amount0);
        let total = amount0 + widen(amounts.amount1);
        let upper = (amount0 * U512::from(BPS_DENOMINATOR) / total).low_u64();
        let upper = upper.clamp(min_share, BPS_DENOMINATOR - min_share);

        Ok(LegShares {
            lower_bps: BPS_DENOMINATOR - upper,
            upper_bps: upper,
        })
    }
}

// ============================================================
// VALIDATION
// ============================================================

/// Sqrt price must be one a pool can actually report
pub fn validate_sqrt_price(sqrt_price_x96: U256) -> Result<(), MathError> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        return Err(MathError::InvalidInput);
    }
    Ok(())
}

pub fn validate_width(width_bps: u32) -> Result<(), MathError> {
    if !(MIN_WIDTH_BPS..=MAX_WIDTH_BPS).contains(&width_bps) {
        return Err(MathError::InvalidInput);
    }
    Ok(())
}

// ============================================================
// RANGE CALCULATION
// ============================================================

/// Band of `width_bps` around the current sqrt price, split by amount weight
pub fn calculate_range(
    sqrt_price_x96: U256,
    amount0: U256,
    amount1: U256,
    width_bps: u32,
) -> Result<PriceRange, MathError> {
    calculate_range_with_policy(
        sqrt_price_x96,
        &AmountPair::new(amount0, amount1),
        width_bps,
        &AmountWeighted::default(),
    )
}

/// Band of `width_bps` around the current sqrt price, split by `policy`
pub fn calculate_range_with_policy<P: SplitPolicy + ?Sized>(
    sqrt_price_x96: U256,
    amounts: &AmountPair,
    width_bps: u32,
    policy: &P,
) -> Result<PriceRange, MathError> {
    validate_sqrt_price(sqrt_price_x96)?;
    validate_width(width_bps)?;
    if amounts.is_empty() {
        return Err(MathError::InvalidInput);
    }

    let shares = policy.leg_shares(amounts)?;
    if !shares.is_valid() {
        return Err(MathError::InvalidInput);
    }

    let (lower_x192, upper_x192) = target_prices_x192(price_x192(sqrt_price_x96), width_bps, shares);

    let range = PriceRange {
        sqrt_price_x96_lower: sqrt_price_from_x192(lower_x192)?,
        sqrt_price_x96_upper: sqrt_price_from_x192(upper_x192)?,
    };

    if range.sqrt_price_x96_lower.is_zero()
        || range.sqrt_price_x96_lower >= sqrt_price_x96
        || sqrt_price_x96 >= range.sqrt_price_x96_upper
    {
        return Err(MathError::InvariantViolation);
    }

    Ok(range)
}

/// Lower and upper linear price targets, both scaled by 2^192
fn target_prices_x192(current_x192: U512, width_bps: u32, shares: LegShares) -> (U512, U512) {
    let d = BPS_DENOMINATOR;
    let w = width_bps as u64;

    // W * s_u < D^2, so this stays positive
    let den = U512::from(d * d + w * shares.lower_bps - w * shares.upper_bps);
    let lower_num = U512::from(d * (d - w));
    let upper_num = U512::from(d * (d + w));

    (
        current_x192 * lower_num / den,
        current_x192 * upper_num / den,
    )
}

// ============================================================
// WIDTH METRIC
// ============================================================

/// |a - b| * scale / (a + b)
fn width_metric(a: U512, b: U512, scale: u64) -> Result<u64, MathError> {
    let sum = a.checked_add(b).ok_or(MathError::Overflow)?;
    if sum.is_zero() {
        return Err(MathError::InvalidInput);
    }
    let diff = if a > b { a - b } else { b - a };
    let scaled = diff
        .checked_mul(U512::from(scale))
        .ok_or(MathError::Overflow)?;

    // diff <= sum, so the quotient is at most `scale`
    Ok((scaled / sum).low_u64())
}

/// Relative width of two linear prices in bps
///
/// Order does not matter, so it works on inverted prices too.
pub fn relative_width_bps(price_a: U256, price_b: U256) -> Result<u64, MathError> {
    width_metric(widen(price_a), widen(price_b), BPS_DENOMINATOR)
}

/// Relative width of a sqrt price band, measured on the exact squared prices
/// and expressed in units of `1 / scale`
pub fn realized_width(
    sqrt_price_x96_lower: U256,
    sqrt_price_x96_upper: U256,
    scale: u64,
) -> Result<u64, MathError> {
    width_metric(
        price_x192(sqrt_price_x96_lower),
        price_x192(sqrt_price_x96_upper),
        scale,
    )
}

pub fn realized_width_bps(
    sqrt_price_x96_lower: U256,
    sqrt_price_x96_upper: U256,
) -> Result<u64, MathError> {
    realized_width(sqrt_price_x96_lower, sqrt_price_x96_upper, BPS_DENOMINATOR)
}
