// Liquidity Connector Math Package
//
// Range selection arithmetic for concentrated liquidity positions:
// floor integer square root, Q64.96 sqrt price conversions, and the
// derivation of a price band of a given relative width.

#![no_std]

pub mod constants;
pub mod error;
pub mod price;
pub mod range;
pub mod sqrt;
pub mod tolerance;
pub mod wide;

// Re-export commonly used items from constants
pub use constants::*;

pub use error::MathError;

// Re-export wide integer types and ledger conversions
pub use wide::{from_soroban, narrow, to_soroban, widen, U256, U512};

// Re-export square root
pub use sqrt::{sqrt, sqrt_wide, IntegerSqrt};

// Re-export price conversions
pub use price::{inverted_price, price, price_x192, sqrt_price_from_x192, to_price, PriceQuote};

// Re-export range calculation
pub use range::{
    calculate_range,
    calculate_range_with_policy,
    realized_width,
    realized_width_bps,
    relative_width_bps,
    validate_sqrt_price,
    validate_width,
    AmountPair,
    AmountWeighted,
    LegShares,
    PriceRange,
    SplitPolicy,
    Symmetric,
};

pub use tolerance::{eps_equal, within_bps};
