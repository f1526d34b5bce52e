//! Connector events

use soroban_sdk::{Address, Env, Symbol, U256};

use crate::types::SplitPolicyKind;

/// Emitted when the connector is initialized
pub fn emit_initialized(
    env: &Env,
    admin: &Address,
    split_policy: SplitPolicyKind,
    min_leg_share_bps: u32,
) {
    env.events().publish(
        (Symbol::new(env, "ConnectorInit"),),
        (admin.clone(), split_policy, min_leg_share_bps),
    );
}

/// Emitted when the admin changes the split policy
pub fn emit_policy_updated(env: &Env, split_policy: SplitPolicyKind, min_leg_share_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "PolicyUpdated"),),
        (split_policy, min_leg_share_bps),
    );
}

/// Emitted for every computed range
pub fn emit_range_calculated(
    env: &Env,
    sqrt_price_x96: &U256,
    width_bps: u32,
    sqrt_price_x96_lower: &U256,
    sqrt_price_x96_upper: &U256,
) {
    env.events().publish(
        (Symbol::new(env, "RangeCalc"),),
        (
            sqrt_price_x96.clone(),
            width_bps,
            sqrt_price_x96_lower.clone(),
            sqrt_price_x96_upper.clone(),
        ),
    );
}
