//! Connector type definitions

use soroban_sdk::{contracttype, Address, U256};

// ============================================================
// CONNECTOR CONFIG
// ============================================================

/// How a requested width is divided between the two legs of the band
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SplitPolicyKind {
    /// Half of the width on each side
    Symmetric,
    /// Leaned toward the token supplied in excess
    AmountWeighted,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectorConfig {
    /// Admin address, the only one allowed to change the policy
    pub admin: Address,
    /// Active split policy
    pub split_policy: SplitPolicyKind,
    /// Smallest share of the band either leg may get (bps)
    pub min_leg_share_bps: u32,
}

// ============================================================
// POOL INTERFACE
// ============================================================

/// Price snapshot returned by a pool's `slot0`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slot0 {
    /// Current sqrt price, Q64.96
    pub sqrt_price_x96: U256,
    /// Current tick
    pub tick: i32,
}

// ============================================================
// RESULTS
// ============================================================

/// Sqrt price bounds for a new position
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceRange {
    pub sqrt_price_x96_lower: U256,
    pub sqrt_price_x96_upper: U256,
}

/// Range computed from a pool snapshot, together with that snapshot
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolRange {
    /// Pool that was read
    pub pool: Address,
    /// Sqrt price the range was built around
    pub sqrt_price_x96: U256,
    /// Tick at the time of the read
    pub tick: i32,
    /// Computed bounds
    pub range: PriceRange,
}

/// Linear price and its inverse for one sqrt price
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceQuote {
    /// token1 per token0
    pub price: U256,
    /// token0 per token1
    pub inverted_price: U256,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Connector config, present once initialized
    Config,
}
