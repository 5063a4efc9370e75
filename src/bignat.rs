//! Arbitrary-precision unsigned integers for enumeration counts.
//!
//! Layer weights and cumulative totals overflow 64 bits even for moderate
//! size bounds, so every count, weight, and rank in the engine is a
//! [`BigNat`]. The type wraps [`num_bigint::BigUint`] as a value type and
//! pins down the arithmetic contract the engine relies on: subtraction
//! requires `self >= rhs`, division requires a non-zero divisor, and the
//! checked forms report [`EngineError::Arithmetic`] instead of panicking.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Shl, Shr, Sub};

use num_bigint::BigUint;
use num_traits::{CheckedSub, One, ToPrimitive, Zero};

use crate::error::EngineError;

/// An arbitrary-precision unsigned integer.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNat(BigUint);

impl BigNat {
    /// The value 0.
    pub fn zero() -> Self {
        BigNat(BigUint::zero())
    }

    /// The value 1.
    pub fn one() -> Self {
        BigNat(BigUint::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parses a canonical decimal string.
    ///
    /// Accepts exactly the output of [`BigNat::to_decimal`] plus redundant
    /// leading zeros. Empty input, signs, and non-digit characters are
    /// rejected with [`EngineError::Parse`].
    pub fn from_decimal(text: &str) -> Result<Self, EngineError> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EngineError::Parse(text.to_string()));
        }
        BigUint::parse_bytes(text.as_bytes(), 10)
            .map(BigNat)
            .ok_or_else(|| EngineError::Parse(text.to_string()))
    }

    /// Subtraction that reports borrow-from-zero instead of panicking.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, EngineError> {
        self.0
            .checked_sub(&rhs.0)
            .map(BigNat)
            .ok_or(EngineError::Arithmetic("subtraction underflow"))
    }

    /// Quotient and remainder in one step.
    ///
    /// Fails with [`EngineError::Arithmetic`] on a zero divisor.
    pub fn divmod(&self, rhs: &Self) -> Result<(Self, Self), EngineError> {
        if rhs.is_zero() {
            return Err(EngineError::Arithmetic("division by zero"));
        }
        let quotient = &self.0 / &rhs.0;
        let remainder = &self.0 % &rhs.0;
        Ok((BigNat(quotient), BigNat(remainder)))
    }

    /// Number of significant bits: 0 for zero, `floor(log2 x) + 1` otherwise.
    pub fn bit_length(&self) -> u64 {
        self.0.bits()
    }

    /// Canonical shortest decimal rendering ("0" for zero, no sign).
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// Lossy narrowing; `None` if the value does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
}

impl From<u64> for BigNat {
    fn from(value: u64) -> Self {
        BigNat(BigUint::from(value))
    }
}

impl From<u32> for BigNat {
    fn from(value: u32) -> Self {
        BigNat(BigUint::from(value))
    }
}

impl From<usize> for BigNat {
    fn from(value: usize) -> Self {
        BigNat(BigUint::from(value))
    }
}

impl Add for &BigNat {
    type Output = BigNat;

    fn add(self, rhs: &BigNat) -> BigNat {
        BigNat(&self.0 + &rhs.0)
    }
}

impl AddAssign<&BigNat> for BigNat {
    fn add_assign(&mut self, rhs: &BigNat) {
        self.0 += &rhs.0;
    }
}

impl Sub for &BigNat {
    type Output = BigNat;

    /// # Panics
    ///
    /// Panics if `rhs > self`. Use [`BigNat::checked_sub`] at the API
    /// boundary; the engine only subtracts behind a comparison.
    fn sub(self, rhs: &BigNat) -> BigNat {
        BigNat(&self.0 - &rhs.0)
    }
}

impl Mul for &BigNat {
    type Output = BigNat;

    fn mul(self, rhs: &BigNat) -> BigNat {
        BigNat(&self.0 * &rhs.0)
    }
}

impl Shl<u64> for &BigNat {
    type Output = BigNat;

    /// Left shift. The backend is arbitrary precision, so the result never
    /// truncates (the fixed-width shift-to-zero rule does not apply).
    fn shl(self, rhs: u64) -> BigNat {
        BigNat(&self.0 << rhs)
    }
}

impl Shr<u64> for &BigNat {
    type Output = BigNat;

    fn shr(self, rhs: u64) -> BigNat {
        BigNat(&self.0 >> rhs)
    }
}

impl fmt::Display for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
