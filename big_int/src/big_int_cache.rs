//! Preallocated values for the small integers the arithmetic paths reach for
//! constantly, plus the radix constants used by division and printing.

use lazy_static::*;

use crate::BigInt;

/// Largest magnitude served from the constant caches.
pub const MAX_CONSTANT: usize = 16;

lazy_static! {
    /// 0 through [`MAX_CONSTANT`].
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|value| BigInt::from_limbs(vec![value as u32], false));

    /// 0 through -[`MAX_CONSTANT`]; index 0 normalizes to non-negative zero.
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|value| BigInt::from_limbs(vec![value as u32], true));

    /// 2^32, the weight of one limb position.
    pub static ref LIMB_BASE: BigInt = BigInt::from_limbs(vec![0, 1], false);

    /// 10^9, the largest power of ten below 2^32; decimal printing peels the
    /// value into groups of this size.
    pub static ref DECIMAL_GROUP: BigInt = BigInt::from_limbs(vec![1_000_000_000], false);
}

#[test]
fn test_cache_values() {
    for value in 0..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[value].to_string(), value.to_string());
    }
    for value in 1..=MAX_CONSTANT {
        assert_eq!(NEG_CACHE[value].to_string(), format!("-{value}"));
    }
    // the negative cache still holds canonical zero at index 0
    assert_eq!(NEG_CACHE[0].to_string(), "0");
    assert!(!NEG_CACHE[0].is_negative());
    assert_eq!(LIMB_BASE.to_string(), "4294967296");
    assert_eq!(DECIMAL_GROUP.to_string(), "1000000000");
}
