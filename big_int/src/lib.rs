//! Big Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers with exact `+` `-` `*`
//!   and floor-rounding `/` `%`, parsed from and printed as decimal strings.
//! - [`ParseBigIntError`]: the error reported when a decimal string does not
//!   parse.
//!
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "12345678901234567890".parse().unwrap();
//! let b = BigInt::from(42_u32);
//! assert_eq!((&a + &b).to_string(), "12345678901234567932");
//! ```

use thiserror::Error;

mod big_int;
mod big_int_cache;

pub use big_int::BigInt;

/// Why a decimal string failed to parse as a [`BigInt`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// The character at `position` (counted in chars from zero) is not a
    /// digit, a leading sign, or a grouping comma.
    #[error("invalid character `{found}` at position {position}")]
    InvalidCharacter { found: char, position: usize },
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }
}
