//! # BigInt
//! Arbitrary-precision signed integers over base-2^32 limbs, with exact
//! schoolbook arithmetic and floor division.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "-7".parse().unwrap();
//! let b: BigInt = "2".parse().unwrap();
//! assert_eq!((&a / &b).to_string(), "-4");
//! assert_eq!((&a % &b).to_string(), "1");
//! ```

use std::cmp::Ordering;
use std::fmt::{Binary, Display, LowerHex};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::str::FromStr;

use crate::big_int_cache::*;
use crate::ParseBigIntError;

/// An arbitrary-precision signed integer.
///
/// The magnitude lives in `digits` as base-2^32 limbs, least significant at
/// index 0, and is kept normalized: the most significant limb is nonzero
/// unless the value is exactly zero, which is stored as a single zero limb
/// with a cleared sign. A value may instead carry the `invalid` marker, the
/// result of dividing by zero; it absorbs through every arithmetic operator
/// and compares as neither equal nor unequal to anything.
#[derive(Debug, Clone)]
pub struct BigInt {
    digits: Vec<u32>,
    negative: bool,
    invalid: bool,
}

// construction
impl BigInt {
    /// The value zero.
    pub fn new() -> Self {
        BigInt { digits: vec![0], negative: false, invalid: false }
    }

    /// The canonical invalid value. Renders as `"NaN"`.
    pub fn invalid() -> Self {
        BigInt { digits: vec![0], negative: false, invalid: true }
    }

    /// Builds a value from raw limbs, normalizing the result. An empty limb
    /// vector yields canonical zero.
    pub(crate) fn from_limbs(digits: Vec<u32>, negative: bool) -> Self {
        let mut result = BigInt { digits, negative, invalid: false };
        result.normalize();
        result
    }

    fn value_of(val: u64, negative: bool) -> Self {
        if val <= MAX_CONSTANT as u64 {
            return if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        let low = (val & 0xFFFF_FFFF) as u32;
        let high = (val >> 32) as u32;
        let digits = if high == 0 { vec![low] } else { vec![low, high] };
        BigInt { digits, negative, invalid: false }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

macro_rules! impl_from_unsigned {
    ($($UT: ty),*) => {
        $(
            impl From<$UT> for BigInt {
                fn from(val: $UT) -> Self {
                    BigInt::value_of(val as u64, false)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ST: ty),*) => {
        $(
            impl From<$ST> for BigInt {
                fn from(val: $ST) -> Self {
                    BigInt::value_of(val.unsigned_abs() as u64, val < 0)
                }
            }
        )*
    };
}

impl_from_unsigned! { u32, u64 }
impl_from_signed! { i32, i64 }

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parses an optionally signed decimal string. A `+` or `-` is only
    /// recognized at position zero; commas after position zero are skipped
    /// as grouping separators. A string with no digits parses to zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = BigInt::new();
        let mut negative = false;
        for (position, ch) in s.chars().enumerate() {
            if position == 0 && (ch == '+' || ch == '-') {
                negative = ch == '-';
                continue;
            }
            if position != 0 && ch == ',' {
                continue;
            }
            let digit = ch
                .to_digit(10)
                .ok_or(ParseBigIntError::InvalidCharacter { found: ch, position })?;
            value = &(&value * &POS_CACHE[10]) + &BigInt::from(digit);
        }
        value.negative = negative;
        value.normalize();
        Ok(value)
    }
}

// queries
impl BigInt {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn is_zero(&self) -> bool {
        !self.invalid && self.digits.len() == 1 && self.digits[0] == 0
    }

    /// Number of base-2^32 limbs in the magnitude.
    pub fn limbs(&self) -> usize {
        self.digits.len()
    }

    /// The limb at `index`, least significant first.
    ///
    /// Panics if `index` is not below [`BigInt::limbs`].
    pub fn limb(&self, index: usize) -> u32 {
        self.digits[index]
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        let mut result = self.clone();
        result.negative = false;
        result
    }
}

// normalization and magnitude helpers
impl BigInt {
    /// Restores the canonical form: an invalid value collapses to the
    /// canonical invalid value, otherwise most-significant zero limbs are
    /// stripped and an all-zero value becomes canonical non-negative zero.
    fn normalize(&mut self) {
        if self.invalid {
            self.digits.clear();
            self.digits.push(0);
            self.negative = false;
            return;
        }
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
            self.negative = false;
        }
    }

    /// Compares magnitudes only; both values must be normalized.
    fn cmp_magnitude(&self, other: &BigInt) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (l, r) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if l != r {
                return l.cmp(r);
            }
        }
        Ordering::Equal
    }
}

// magnitude kernels: sign-agnostic arithmetic over the absolute values, so
// callers may pass signed values directly
impl BigInt {
    fn abs_add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        if lhs.invalid || rhs.invalid {
            return BigInt::invalid();
        }
        let len = lhs.digits.len().max(rhs.digits.len());
        let mut digits = Vec::with_capacity(len + 1);
        let mut carry = 0u64;
        for i in 0..len {
            let ld = u64::from(lhs.digits.get(i).copied().unwrap_or(0));
            let rd = u64::from(rhs.digits.get(i).copied().unwrap_or(0));
            let sum = ld + rd + carry;
            digits.push(sum as u32);
            carry = sum >> 32;
        }
        if carry != 0 {
            digits.push(1);
        }
        BigInt::from_limbs(digits, false)
    }

    fn abs_sub(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        if lhs.invalid || rhs.invalid {
            return BigInt::invalid();
        }
        // always the smaller magnitude off the larger
        let (big, little) = if lhs.cmp_magnitude(rhs) == Ordering::Less {
            (rhs, lhs)
        } else {
            (lhs, rhs)
        };
        let mut digits = Vec::with_capacity(big.digits.len());
        let mut borrow = false;
        for i in 0..big.digits.len() {
            let ld = u64::from(big.digits[i]);
            let rd = u64::from(little.digits.get(i).copied().unwrap_or(0)) + u64::from(borrow);
            if ld >= rd {
                digits.push((ld - rd) as u32);
                borrow = false;
            } else {
                digits.push((ld + (1u64 << 32) - rd) as u32);
                borrow = true;
            }
        }
        if borrow {
            unreachable!("magnitude subtraction ended with a pending borrow");
        }
        BigInt::from_limbs(digits, false)
    }

    fn abs_mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        if lhs.invalid || rhs.invalid {
            return BigInt::invalid();
        }
        let mut result = BigInt::new();
        for (i, &rd) in rhs.digits.iter().enumerate() {
            let mut row = Vec::with_capacity(i + lhs.digits.len() + 1);
            row.resize(i, 0u32);
            let mut carry = 0u64;
            for &ld in &lhs.digits {
                let product = u64::from(ld) * u64::from(rd) + carry;
                row.push(product as u32);
                carry = product >> 32;
            }
            if carry != 0 {
                row.push(carry as u32);
            }
            result = BigInt::abs_add(&result, &BigInt::from_limbs(row, false));
        }
        result
    }

    fn abs_div(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        if lhs.invalid || rhs.invalid {
            return BigInt::invalid();
        }
        if rhs.is_zero() {
            return BigInt::invalid();
        }
        let l = lhs.abs();
        let r = rhs.abs();
        if l < r {
            return BigInt::new();
        }
        if l == r {
            return POS_CACHE[1].clone();
        }

        // long division, one quotient limb per position from the top down
        let offset = l.digits.len() - r.digits.len();
        let mut remainder = BigInt::from_limbs(l.digits[offset + 1..].to_vec(), false);
        let mut quotient = Vec::with_capacity(offset + 1);
        for i in (0..=offset).rev() {
            remainder = BigInt::abs_add(
                &BigInt::abs_mul(&remainder, &LIMB_BASE),
                &BigInt::from(l.digits[i]),
            );
            let digit = if remainder == r {
                1
            } else if remainder < r {
                0
            } else {
                // greatest s in [0, 2^32) with r * s <= remainder, found by a
                // 32-step binary search over the limb range
                let mut digit = 0u32;
                let mut range = 1u32 << 31;
                let mut s = range;
                for _ in 0..32 {
                    let product = BigInt::abs_mul(&r, &BigInt::from(s));
                    if remainder >= product && BigInt::abs_sub(&remainder, &product) < r {
                        digit = s;
                        break;
                    }
                    range /= 2;
                    if remainder > product {
                        s += range;
                    } else {
                        s -= range;
                    }
                }
                digit
            };
            quotient.push(digit);
            remainder = BigInt::abs_sub(&remainder, &BigInt::abs_mul(&r, &BigInt::from(digit)));
        }
        quotient.reverse();
        BigInt::from_limbs(quotient, false)
    }
}

// addition
impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        let mut result;
        if self.negative == rhs.negative {
            result = BigInt::abs_add(self, rhs);
            result.negative = self.negative;
        } else {
            result = BigInt::abs_sub(self, rhs);
            result.negative = if self.cmp_magnitude(rhs) != Ordering::Less {
                self.negative
            } else {
                rhs.negative
            };
        }
        result.invalid = self.invalid || rhs.invalid;
        result.normalize();
        result
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

// negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negative = !self.negative;
        self.normalize();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// subtraction
impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &-rhs
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = &*self - &rhs;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

// multiplication
impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = BigInt::abs_mul(self, rhs);
        result.negative = self.negative != rhs.negative;
        result.invalid = self.invalid || rhs.invalid;
        result.normalize();
        result
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

// division
impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        let mut result = BigInt::abs_div(self, rhs);
        result.negative = self.negative != rhs.negative;
        result.invalid = result.invalid || self.invalid || rhs.invalid;
        // a nonzero remainder with operands of opposite sign rounds the
        // quotient toward negative infinity, matching Python's floor division
        if self.negative != rhs.negative && *self != rhs * &result {
            result -= &POS_CACHE[1];
        }
        result.normalize();
        result
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

// modulo, sign follows the divisor
impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        let quotient = self / rhs;
        self - &(&quotient * rhs)
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = &*self % &rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

// comparison
impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        if self.invalid || other.invalid {
            return false;
        }
        self.negative == other.negative && self.digits == other.digits
    }

    /// Invalid values are neither equal nor unequal to anything: `!=` also
    /// reports false when either side is invalid, so it is deliberately not
    /// the negation of `==` for such pairs.
    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        if self.invalid || other.invalid {
            return false;
        }
        !self.eq(other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.invalid || other.invalid {
            return None;
        }
        if self.negative != other.negative {
            return Some(if self.negative { Ordering::Less } else { Ordering::Greater });
        }
        let magnitude = self.cmp_magnitude(other);
        Some(if self.negative { magnitude.reverse() } else { magnitude })
    }
}

// printing
impl Display for BigInt {
    /// Renders the decimal value, `"NaN"` for the invalid value.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.invalid {
            return f.write_str("NaN");
        }
        // peel off 9 decimal digits per round, least significant group first
        let mut groups: Vec<u32> = Vec::new();
        let mut tmp = self.abs();
        while !tmp.is_zero() {
            let quotient = BigInt::abs_div(&tmp, &DECIMAL_GROUP);
            let remainder = BigInt::abs_sub(&tmp, &BigInt::abs_mul(&quotient, &DECIMAL_GROUP));
            groups.push(remainder.digits[0]);
            tmp = quotient;
        }
        let Some((&top, rest)) = groups.split_last() else {
            return f.write_str("0");
        };
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", top)?;
        for group in rest.iter().rev() {
            write!(f, "{:09}", group)?;
        }
        Ok(())
    }
}

impl LowerHex for BigInt {
    /// Dumps the stored limbs, most significant first, 8 hex digits per limb.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.negative { "-" } else { "+" })?;
        f.write_str("0x")?;
        for limb in self.digits.iter().rev() {
            write!(f, "{:08x}", limb)?;
        }
        Ok(())
    }
}

impl Binary for BigInt {
    /// Dumps the stored limbs, most significant first, 32 bits per limb.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.negative { "-" } else { "+" })?;
        f.write_str("0b")?;
        for limb in self.digits.iter().rev() {
            write!(f, "{:032b}", limb)?;
        }
        Ok(())
    }
}

#[cfg(test)]
fn big(text: &str) -> BigInt {
    text.parse().expect("test value parses")
}

#[test]
fn test_from() {
    assert_eq!(BigInt::from(0_u32).to_string(), "0");
    assert_eq!(BigInt::from(4294967295_u32).to_string(), "4294967295");
    assert_eq!(BigInt::from(4294967296_u64).to_string(), "4294967296");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(-1_i32).to_string(), "-1");
    assert_eq!(BigInt::from(i32::MIN).to_string(), "-2147483648");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(0_i64).to_string(), "0");
    assert!(!BigInt::from(0_i64).is_negative());
    assert!(BigInt::default().is_zero());

    // 64-bit values split into two limbs, high limb collapsed when zero
    let a = BigInt::from(4294967296_u64);
    assert_eq!(a.limbs(), 2);
    assert_eq!(a.limb(0), 0);
    assert_eq!(a.limb(1), 1);
    assert_eq!(BigInt::from(5_u64).limbs(), 1);
    let m = BigInt::from(i64::MIN);
    assert_eq!(m.limbs(), 2);
    assert_eq!(m.limb(0), 0);
    assert_eq!(m.limb(1), 0x8000_0000);
}

#[test]
fn test_parse() {
    assert_eq!(big("12345678901234567890").to_string(), "12345678901234567890");
    assert_eq!(big("+42").to_string(), "42");
    assert_eq!(big("1,234,567").to_string(), "1234567");
    assert_eq!(big("007").to_string(), "7");

    // "-0" normalizes to canonical zero
    let zero = big("-0");
    assert_eq!(zero.to_string(), "0");
    assert!(!zero.is_negative());

    // digit-free strings are zero
    assert_eq!(big("").to_string(), "0");
    assert_eq!(big("-").to_string(), "0");
    assert_eq!(big("+").to_string(), "0");
}

#[test]
fn test_parse_rejects() {
    assert_eq!(
        "12a3".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidCharacter { found: 'a', position: 2 })
    );
    // a sign is only a sign at position zero
    assert_eq!(
        "++1".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidCharacter { found: '+', position: 1 })
    );
    assert_eq!(
        "1-1".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidCharacter { found: '-', position: 1 })
    );
    // a comma is only a separator after position zero
    assert_eq!(
        ",123".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidCharacter { found: ',', position: 0 })
    );
    assert_eq!(
        "1 2".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidCharacter { found: ' ', position: 1 })
    );
}

#[test]
fn test_abs_kernels() {
    // kernels ignore operand signs entirely
    assert_eq!(BigInt::abs_add(&big("-5"), &big("3")).to_string(), "8");
    assert_eq!(BigInt::abs_sub(&big("-100"), &big("1")).to_string(), "99");
    assert_eq!(BigInt::abs_mul(&big("-3"), &big("-5")).to_string(), "15");
    assert_eq!(BigInt::abs_div(&big("-120"), &big("13")).to_string(), "9");

    // abs_sub swaps so the smaller magnitude comes off the larger
    assert_eq!(BigInt::abs_sub(&big("1"), &big("100")).to_string(), "99");

    // carry into a fresh limb
    let sum = BigInt::abs_add(&big("4294967295"), &big("1"));
    assert_eq!(sum.limbs(), 2);
    assert_eq!(sum.to_string(), "4294967296");

    // borrow chain across a zero limb
    let diff = BigInt::abs_sub(&big("18446744073709551616"), &big("1"));
    assert_eq!(diff.to_string(), "18446744073709551615");

    assert!(BigInt::abs_div(&big("7"), &big("0")).is_invalid());
    assert_eq!(BigInt::abs_div(&big("5"), &big("7")).to_string(), "0");
    assert_eq!(BigInt::abs_div(&big("7"), &big("7")).to_string(), "1");
}

#[test]
fn test_add() {
    assert_eq!((&big("12345678901234567890") + &big("1")).to_string(), "12345678901234567891");
    assert_eq!((&big("4294967295") + &big("1")).to_string(), "4294967296");
    assert_eq!((&big("18446744073709551615") + &big("1")).to_string(), "18446744073709551616");
    assert_eq!((&big("99999999999999999999") + &big("1")).to_string(), "100000000000000000000");

    // mixed signs take the sign of the larger magnitude
    assert_eq!((&big("-5") + &big("3")).to_string(), "-2");
    assert_eq!((&big("5") + &big("-3")).to_string(), "2");
    assert_eq!((&big("-3") + &big("5")).to_string(), "2");
    assert_eq!((&big("3") + &big("-5")).to_string(), "-2");

    let zero = &big("12345678901234567890") + &big("-12345678901234567890");
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
}

#[test]
fn test_sub() {
    assert_eq!((&big("18446744073709551616") - &big("1")).to_string(), "18446744073709551615");
    assert_eq!((&big("5") - &big("8")).to_string(), "-3");
    assert_eq!((&big("-5") - &big("-8")).to_string(), "3");

    let a = big("98765432109876543210");
    assert!((&a - &a).is_zero());
}

#[test]
fn test_mul() {
    assert_eq!((&big("100") * &big("0")).to_string(), "0");
    let zero = &big("-100") * &big("0");
    assert_eq!(zero.to_string(), "0");
    assert!(!zero.is_negative());

    assert_eq!((&big("4294967296") * &big("4294967296")).to_string(), "18446744073709551616");
    assert_eq!((&big("999999999") * &big("999999999")).to_string(), "999999998000000001");
    assert_eq!((&big("123456789") * &big("987654321")).to_string(), "121932631112635269");
    assert_eq!(
        (&big("12345678901234567890") * &big("10000000000")).to_string(),
        "123456789012345678900000000000"
    );

    assert_eq!((&big("-3") * &big("5")).to_string(), "-15");
    assert_eq!((&big("-3") * &big("-5")).to_string(), "15");
}

#[test]
fn test_div() {
    assert_eq!((&big("120") / &big("13")).to_string(), "9");
    assert_eq!((&big("1000000000000000000000") / &big("3")).to_string(), "333333333333333333333");
    assert_eq!((&big("123456789") / &big("123456789")).to_string(), "1");
    assert_eq!((&big("5") / &big("100")).to_string(), "0");

    // multi-limb quotients, including the largest possible quotient limb
    assert_eq!((&big("18446744073709551616") / &big("4294967296")).to_string(), "4294967296");
    assert_eq!((&big("18446744069414584320") / &big("4294967296")).to_string(), "4294967295");
    assert_eq!((&big("18446744073709551617") / &big("4294967296")).to_string(), "4294967296");

    // floor semantics when signs differ
    assert_eq!((&big("7") / &big("2")).to_string(), "3");
    assert_eq!((&big("-7") / &big("2")).to_string(), "-4");
    assert_eq!((&big("7") / &big("-2")).to_string(), "-4");
    assert_eq!((&big("-7") / &big("-2")).to_string(), "3");
    assert_eq!((&big("-5") / &big("100")).to_string(), "-1");
    assert_eq!((&big("-6") / &big("2")).to_string(), "-3");
    assert_eq!((&big("0") / &big("-5")).to_string(), "0");

    assert!((&big("7") / &big("0")).is_invalid());
    assert!((&big("0") / &big("0")).is_invalid());
}

#[test]
fn test_rem() {
    assert_eq!((&big("7") % &big("2")).to_string(), "1");
    assert_eq!((&big("-7") % &big("2")).to_string(), "1");
    assert_eq!((&big("7") % &big("-2")).to_string(), "-1");
    assert_eq!((&big("-7") % &big("-2")).to_string(), "-1");

    assert_eq!((&big("1") % &big("3")).to_string(), "1");
    assert_eq!((&big("-1") % &big("3")).to_string(), "2");
    assert_eq!((&big("1") % &big("-3")).to_string(), "-2");
    assert_eq!((&big("-1") % &big("-3")).to_string(), "-1");

    assert_eq!((&big("10000000000000000") % &big("10")).to_string(), "0");
    assert_eq!((&big("18446744073709551617") % &big("4294967296")).to_string(), "1");

    assert!((&big("7") % &big("0")).is_invalid());
}

#[test]
fn test_invalid_propagation() {
    let nan = &big("1") / &big("0");
    assert!(nan.is_invalid());
    assert_eq!(nan.to_string(), "NaN");

    let one = big("1");
    assert!((&nan + &one).is_invalid());
    assert!((&one - &nan).is_invalid());
    assert!((&nan * &one).is_invalid());
    assert!((&nan / &one).is_invalid());
    assert!((&one % &nan).is_invalid());
    assert!((-&nan).is_invalid());
    assert!(nan.abs().is_invalid());
}

#[test]
fn test_invalid_comparisons() {
    let nan = &big("1") / &big("0");
    let one = big("1");

    // == and != BOTH report false for invalid operands; != is deliberately
    // not the negation of == here
    assert!(!(nan == nan.clone()));
    assert!(!(nan != nan.clone()));
    assert!(!(nan == one));
    assert!(!(nan != one));

    assert!(!(nan < one));
    assert!(!(nan > one));
    assert!(!(nan <= one));
    assert!(!(nan >= one));
    assert!(!(one < nan));
    assert!(!(one >= nan));
}

#[test]
fn test_cmp() {
    assert!(big("2") < big("10"));
    assert!(big("10") > big("2"));
    assert!(big("-1") < big("0"));
    assert!(big("0") < big("1"));
    assert!(big("-5") < big("3"));

    // negative values invert the magnitude comparison
    assert!(big("-10") < big("-2"));
    assert!(big("-2") > big("-10"));

    // limb count decides before limb content
    assert!(big("4294967296") > big("4294967295"));

    // equal limb counts compare from the most significant limb down
    assert!(big("34359738373") > big("30064771077"));
    assert!(big("30064771077") < big("30064771078"));

    let a = big("12345678901234567890");
    assert!(a <= a.clone());
    assert!(a >= a.clone());
    assert_eq!(a, a.clone());
}

#[test]
fn test_neg_abs() {
    assert_eq!((-big("5")).to_string(), "-5");
    assert_eq!((-big("-5")).to_string(), "5");
    assert_eq!(big("-5").abs().to_string(), "5");
    assert_eq!(big("5").abs().to_string(), "5");

    // negating zero keeps it canonical
    let zero = -big("0");
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::new().to_string(), "0");
    assert_eq!(big("-123456789012345678901234567890").to_string(), "-123456789012345678901234567890");

    // 9-digit group boundaries
    assert_eq!(big("999999999").to_string(), "999999999");
    assert_eq!(big("1000000000").to_string(), "1000000000");
    assert_eq!(big("1000000001").to_string(), "1000000001");
    assert_eq!(big("1000000000000000000").to_string(), "1000000000000000000");
}

#[test]
fn test_round_trip() {
    let cases = [
        "0",
        "1",
        "-1",
        "42",
        "999999999",
        "1000000000",
        "4294967296",
        "18446744073709551615",
        "18446744073709551616",
        "-12345678901234567890",
        "340282366920938463463374607431768211456",
        "-340282366920938463463374607431768211455",
    ];
    for case in cases {
        assert_eq!(big(case).to_string(), case);
    }
}

#[test]
fn test_bit_dump() {
    assert_eq!(format!("{:x}", BigInt::from(255_u32)), "+0x000000ff");
    assert_eq!(format!("{:x}", BigInt::from(-255_i32)), "-0x000000ff");
    assert_eq!(format!("{:x}", BigInt::from(0x1_0000_0002_u64)), "+0x0000000100000002");
    assert_eq!(format!("{:x}", BigInt::new()), "+0x00000000");
    // the dump shows stored limbs even for the invalid value
    assert_eq!(format!("{:x}", BigInt::invalid()), "+0x00000000");

    assert_eq!(format!("{:b}", BigInt::from(5_u32)), "+0b00000000000000000000000000000101");
    assert_eq!(
        format!("{:b}", BigInt::from(0x1_0000_0000_u64)),
        "+0b0000000000000000000000000000000100000000000000000000000000000000"
    );
}

#[test]
fn test_compound_assign() {
    let mut x = big("10");
    x += big("5");
    assert_eq!(x.to_string(), "15");
    x -= &big("3");
    assert_eq!(x.to_string(), "12");
    x *= big("2");
    assert_eq!(x.to_string(), "24");
    x /= &big("5");
    assert_eq!(x.to_string(), "4");
    x %= big("3");
    assert_eq!(x.to_string(), "1");

    let mut y = big("-7");
    y /= big("2");
    assert_eq!(y.to_string(), "-4");
}

#[test]
fn test_algebraic_properties() {
    let values = [
        "0", "1", "-1", "7", "-7", "100", "-100",
        "4294967295", "-4294967296",
        "12345678901234567890", "-98765432109876543210",
    ];
    let values: Vec<BigInt> = values.iter().map(|v| big(v)).collect();

    for a in &values {
        let diff = a - a;
        assert!(diff.is_zero());
        assert!(!diff.is_negative());
        for b in &values {
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            for c in &values {
                assert_eq!(&(a + b) + c, a + &(b + c));
            }
        }
    }

    // (a / b) * b + a % b == a, with the remainder sign following the divisor
    for a in &values {
        for b in &values {
            if b.is_zero() {
                continue;
            }
            let quotient = a / b;
            let remainder = a % b;
            assert_eq!(&(&quotient * b) + &remainder, *a);
            assert!(remainder.is_zero() || remainder.is_negative() == b.is_negative());
            assert!(remainder.abs() < b.abs());
        }
    }
}
