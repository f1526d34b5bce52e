#![no_std]

//! # Liquidity Connector
//!
//! Chooses price ranges for concentrated liquidity positions.
//!
//! ## Features:
//! 1. Band of a given relative width around the current sqrt price
//! 2. Band built directly from a pool's `slot0` snapshot
//! 3. Admin-selectable split between the downside and upside legs
//!
//! ## Functions:
//! - Write (2): initialize, set_split_policy
//! - Quote (2): calculate_ticks, calculate_ticks_for_pool
//! - Read (4): to_price, sqrt, get_config, is_initialized
//!
//! Quotes are not pure reads: each one publishes a `RangeCalc` event.
//! Quotes and `get_config` also extend the TTL of the stored config.
//!
//! Bounds come back as sqrt prices; rounding them to a pool's tick
//! spacing is left to the caller.

use lpconnector_math::{
    self as math, AmountPair, AmountWeighted, Symmetric, DEFAULT_MIN_LEG_SHARE_BPS,
    HALF_SHARE_BPS,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec, U256};

mod error;
mod events;
mod storage;
mod types;

pub use error::ConnectorError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct LiquidityConnector;

#[contractimpl]
impl LiquidityConnector {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize connector with an admin and a split policy
    pub fn initialize(
        env: Env,
        admin: Address,
        split_policy: SplitPolicyKind,
        min_leg_share_bps: u32,
    ) -> Result<(), ConnectorError> {
        admin.require_auth();

        if has_config(&env) {
            return Err(ConnectorError::AlreadyInitialized);
        }

        Self::validate_min_leg_share(min_leg_share_bps)?;

        let config = ConnectorConfig {
            admin: admin.clone(),
            split_policy,
            min_leg_share_bps,
        };
        write_config(&env, &config);

        emit_initialized(&env, &admin, split_policy, min_leg_share_bps);

        Ok(())
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Replace the split policy (admin only)
    pub fn set_split_policy(
        env: Env,
        split_policy: SplitPolicyKind,
        min_leg_share_bps: u32,
    ) -> Result<(), ConnectorError> {
        let mut config = read_config(&env).ok_or(ConnectorError::NotInitialized)?;
        config.admin.require_auth();

        Self::validate_min_leg_share(min_leg_share_bps)?;

        config.split_policy = split_policy;
        config.min_leg_share_bps = min_leg_share_bps;
        write_config(&env, &config);

        emit_policy_updated(&env, split_policy, min_leg_share_bps);

        Ok(())
    }

    // ========================================================
    // RANGE FUNCTIONS
    // ========================================================

    /// Sqrt price bounds of a band `width_bps` wide around `sqrt_price_x96`
    ///
    /// `amount0` and `amount1` only weight the two legs; with the default
    /// policy equal amounts give a symmetric band.
    pub fn calculate_ticks(
        env: Env,
        sqrt_price_x96: U256,
        amount0: U256,
        amount1: U256,
        width_bps: u32,
    ) -> Result<PriceRange, ConnectorError> {
        Self::compute_range(&env, &sqrt_price_x96, &amount0, &amount1, width_bps)
    }

    /// Same as `calculate_ticks`, around the pool's current price
    ///
    /// The pool is read once; the whole computation uses that snapshot.
    pub fn calculate_ticks_for_pool(
        env: Env,
        pool: Address,
        amount0: U256,
        amount1: U256,
        width_bps: u32,
    ) -> Result<PoolRange, ConnectorError> {
        let slot0 = Self::read_slot0(&env, &pool);
        let range = Self::compute_range(&env, &slot0.sqrt_price_x96, &amount0, &amount1, width_bps)?;

        Ok(PoolRange {
            pool,
            sqrt_price_x96: slot0.sqrt_price_x96,
            tick: slot0.tick,
            range,
        })
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Linear price and inverse of a sqrt price
    pub fn to_price(env: Env, sqrt_price_x96: U256) -> Result<PriceQuote, ConnectorError> {
        let quote = math::to_price(math::from_soroban(&sqrt_price_x96))?;

        Ok(PriceQuote {
            price: math::to_soroban(&env, &quote.price),
            inverted_price: math::to_soroban(&env, &quote.inverted_price),
        })
    }

    /// Floor square root
    pub fn sqrt(env: Env, n: U256) -> U256 {
        math::to_soroban(&env, &math::sqrt(math::from_soroban(&n)))
    }

    /// Get connector configuration
    pub fn get_config(env: Env) -> Result<ConnectorConfig, ConnectorError> {
        read_config(&env).ok_or(ConnectorError::NotInitialized)
    }

    /// Check if connector is initialized
    pub fn is_initialized(env: Env) -> bool {
        has_config(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn validate_min_leg_share(min_leg_share_bps: u32) -> Result<(), ConnectorError> {
        if min_leg_share_bps == 0 || min_leg_share_bps as u64 > HALF_SHARE_BPS {
            return Err(ConnectorError::InvalidPolicy);
        }
        Ok(())
    }

    /// Configured policy, or the amount-weighted default before initialization
    fn active_policy(env: &Env) -> (SplitPolicyKind, u32) {
        match read_config(env) {
            Some(config) => (config.split_policy, config.min_leg_share_bps),
            None => (SplitPolicyKind::AmountWeighted, DEFAULT_MIN_LEG_SHARE_BPS),
        }
    }

    fn compute_range(
        env: &Env,
        sqrt_price_x96: &U256,
        amount0: &U256,
        amount1: &U256,
        width_bps: u32,
    ) -> Result<PriceRange, ConnectorError> {
        let current = math::from_soroban(sqrt_price_x96);
        let amounts = AmountPair::new(math::from_soroban(amount0), math::from_soroban(amount1));

        let range = match Self::active_policy(env) {
            (SplitPolicyKind::Symmetric, _) => {
                math::calculate_range_with_policy(current, &amounts, width_bps, &Symmetric)
            }
            (SplitPolicyKind::AmountWeighted, min_leg_share_bps) => {
                let policy = AmountWeighted { min_leg_share_bps };
                math::calculate_range_with_policy(current, &amounts, width_bps, &policy)
            }
        }?;

        let result = PriceRange {
            sqrt_price_x96_lower: math::to_soroban(env, &range.sqrt_price_x96_lower),
            sqrt_price_x96_upper: math::to_soroban(env, &range.sqrt_price_x96_upper),
        };

        emit_range_calculated(
            env,
            sqrt_price_x96,
            width_bps,
            &result.sqrt_price_x96_lower,
            &result.sqrt_price_x96_upper,
        );

        Ok(result)
    }

    fn read_slot0(env: &Env, pool: &Address) -> Slot0 {
        env.invoke_contract(pool, &Symbol::new(env, "slot0"), Vec::new(env))
    }
}
