// SPDX-License-Identifier: MIT
// Sqrt Price <-> Linear Price Conversions

use crate::constants::Q192;
use crate::error::MathError;
use crate::sqrt::sqrt_wide;
use crate::wide::{narrow, widen, U256, U512};

/// Linear prices derived from one sqrt price snapshot
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PriceQuote {
    /// token1 per token0, floor(sqrt^2 / 2^192)
    pub price: U256,
    /// token0 per token1, floor(2^192 / sqrt^2)
    pub inverted_price: U256,
}

/// Exact linear price scaled by 2^192 (the square of the sqrt price)
#[inline]
pub fn price_x192(sqrt_price_x96: U256) -> U512 {
    let wide = widen(sqrt_price_x96);
    wide * wide
}

/// Convert a Q64.96 sqrt price into its linear price and inverse
pub fn to_price(sqrt_price_x96: U256) -> Result<PriceQuote, MathError> {
    if sqrt_price_x96.is_zero() {
        return Err(MathError::InvalidPrice);
    }

    let squared = price_x192(sqrt_price_x96);
    let price = narrow(squared >> 192usize).ok_or(MathError::Overflow)?;
    // squared >= 1, so the quotient is at most 2^192
    let inverted_price = narrow(Q192 / squared).ok_or(MathError::Overflow)?;

    Ok(PriceQuote { price, inverted_price })
}

/// token1 per token0
pub fn price(sqrt_price_x96: U256) -> Result<U256, MathError> {
    to_price(sqrt_price_x96).map(|quote| quote.price)
}

/// token0 per token1
pub fn inverted_price(sqrt_price_x96: U256) -> Result<U256, MathError> {
    to_price(sqrt_price_x96).map(|quote| quote.inverted_price)
}

/// Take an X192 linear price back to the sqrt price domain (floor)
pub fn sqrt_price_from_x192(price_x192: U512) -> Result<U256, MathError> {
    narrow(sqrt_wide(price_x192)).ok_or(MathError::Overflow)
}
