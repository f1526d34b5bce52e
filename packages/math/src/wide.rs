// SPDX-License-Identifier: MIT
// Wide Unsigned Integers and Ledger Conversions

#![allow(
    clippy::assign_op_pattern,
    clippy::ptr_offset_with_cast,
    clippy::manual_range_contains,
    clippy::reversed_empty_ranges
)]

use soroban_sdk::{Bytes, Env};
use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer, constructed out of 4 words x 64 bits.
    pub struct U256(4);
}

construct_uint! {
    /// 512-bit unsigned integer, constructed out of 8 words x 64 bits.
    /// Holds squared sqrt prices, which reach 320 bits at the pool bounds.
    pub struct U512(8);
}

/// Lossless widening to 512 bits
#[inline]
pub fn widen(x: U256) -> U512 {
    let U256(ref words) = x;
    U512([words[0], words[1], words[2], words[3], 0, 0, 0, 0])
}

/// Narrow to 256 bits, `None` if any of the high words is set
#[inline]
pub fn narrow(x: U512) -> Option<U256> {
    let U512(ref words) = x;
    if words[4..].iter().any(|&w| w != 0) {
        return None;
    }
    Some(U256([words[0], words[1], words[2], words[3]]))
}

/// Read a ledger U256 (host object) into a native value
pub fn from_soroban(x: &soroban_sdk::U256) -> U256 {
    let mut buf = [0u8; 32];
    x.to_be_bytes().copy_into_slice(&mut buf);
    U256::from_big_endian(&buf)
}

/// Write a native value back as a ledger U256
pub fn to_soroban(env: &Env, x: &U256) -> soroban_sdk::U256 {
    let mut buf = [0u8; 32];
    x.to_big_endian(&mut buf);
    soroban_sdk::U256::from_be_bytes(env, &Bytes::from_array(env, &buf))
}
