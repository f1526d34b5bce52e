// SPDX-License-Identifier: MIT
// Floor Integer Square Root (Newton-Raphson)

use crate::wide::{U256, U512};

/// Exact floor square root
pub trait IntegerSqrt: Sized {
    /// Returns the largest `s` with `s * s <= self`
    fn floor_sqrt(self) -> Self;
}

impl IntegerSqrt for u128 {
    fn floor_sqrt(self) -> Self {
        if self < 2 {
            return self;
        }
        let bits = 128 - self.leading_zeros();
        // 2^ceil(bits/2) >= sqrt(self); at most 2^64, so x + self/x <= 2^65
        let mut x: u128 = 1 << bits.div_ceil(2);
        loop {
            let y = (x + self / x) >> 1;
            // Iterates descend to the root, then either repeat or bounce to root + 1
            if y >= x {
                return x;
            }
            x = y;
        }
    }
}

macro_rules! impl_integer_sqrt_wide {
    ($($name:ident),*) => {
        $(
            impl IntegerSqrt for $name {
                fn floor_sqrt(self) -> Self {
                    if self < $name::from(2u8) {
                        return self;
                    }
                    let mut x = $name::one() << self.bits().div_ceil(2);
                    loop {
                        let y = (x + self / x) >> 1usize;
                        if y >= x {
                            return x;
                        }
                        x = y;
                    }
                }
            }
        )*
    };
}

impl_integer_sqrt_wide!(U256, U512);

/// Floor square root of a 256-bit value
#[inline]
pub fn sqrt(n: U256) -> U256 {
    n.floor_sqrt()
}

/// Floor square root of a 512-bit value
///
/// The root of any 512-bit value fits in 256 bits.
#[inline]
pub fn sqrt_wide(n: U512) -> U512 {
    n.floor_sqrt()
}
