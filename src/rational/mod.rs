//! # Fractions
//!
//! A mutable exact fraction, stored exactly as supplied or computed.
use std::cell::Cell;

use num::{BigInt, BigRational, One, Zero};

use crate::error::Result;
use crate::rational::operand::{FractionLike, FractionRecord, Operand};

#[macro_use]
mod macros;
pub mod operand;
pub mod reduce;
mod arithmetic;
mod decimal;

/// Number of digits after the decimal point rendered by `Display` when the formatter doesn't
/// specify a precision.
pub const DEFAULT_PRECISION: usize = 80;

/// An exact fraction of two arbitrary precision integers.
///
/// Neither the sign nor the magnitude is canonicalized: the denominator may be zero (representing
/// an infinity, or an undefined value when the numerator is zero too) or negative. The arithmetic
/// operations mutate the value in place and never reduce it; see
/// [`Reducible`](crate::Reducible) for that.
///
/// Equality compares numerator and denominator as stored, so `1/2` and `2/4` are not equal.
/// Whether irreducibility has been determined doesn't matter.
#[derive(Clone, Debug)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
    /// Whether the fraction is in lowest terms, `None` while unknown.
    ///
    /// Cleared by every operation that changes the numerator or denominator, except reduction.
    irreducible: Cell<Option<bool>>,
}

impl Fraction {
    /// Create a fraction `numerator / denominator`, exactly as given.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self::from_parts(numerator.into(), denominator.into())
    }

    /// The whole number `numerator / 1`.
    pub fn from_integer(numerator: impl Into<BigInt>) -> Self {
        Self::from_parts(numerator.into(), BigInt::one())
    }

    /// Copy the fields of any fraction-like value.
    ///
    /// Irreducibility is not carried over, even when `value` is a `Fraction`; use `clone` for that.
    pub fn from_like<F: FractionLike + ?Sized>(value: &F) -> Self {
        Self::from_parts(value.numerator().clone(), value.denominator().clone())
    }

    /// Create a fraction from a loosely typed operand.
    ///
    /// A `Fraction` operand is copied together with its known irreducibility, other fraction-like
    /// operands are copied field by field and an integer operand becomes `numerator / denominator`
    /// with the denominator defaulting to one.
    ///
    /// # Errors
    ///
    /// When the operand carries a denominator that is not an integer.
    pub fn from_operand<'a>(source: impl Into<Operand<'a>>) -> Result<Self> {
        let source: Operand<'a> = source.into();
        match source {
            Operand::Value(fraction) => Ok(fraction.clone()),
            Operand::Owned(fraction) => Ok(fraction),
            Operand::Like(like) => Ok(Self::from_like(like)),
            Operand::Record(FractionRecord { numerator, denominator }) => {
                Ok(Self::from_parts(numerator, denominator))
            },
            Operand::Integer(numerator, denominator) => {
                let denominator = denominator.into_integer()?.unwrap_or_else(BigInt::one);
                Ok(Self::from_parts(numerator, denominator))
            },
        }
    }

    /// The value `0 / 1`.
    pub fn zero() -> Self {
        Self::from_parts(BigInt::zero(), BigInt::one())
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Convert into a normalized `num` rational.
    ///
    /// # Return value
    ///
    /// `None` if the denominator is zero, as `BigRational` can't represent infinities.
    pub fn to_ratio(&self) -> Option<BigRational> {
        if self.denominator.is_zero() {
            None
        } else {
            Some(BigRational::new(self.numerator.clone(), self.denominator.clone()))
        }
    }

    fn from_parts(numerator: BigInt, denominator: BigInt) -> Self {
        Self { numerator, denominator, irreducible: Cell::new(None) }
    }

    /// Forget whether the fraction is irreducible, after the numerator or denominator changed.
    fn invalidate(&mut self) {
        self.irreducible.set(None);
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for Fraction {}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl FractionLike for Fraction {
    fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    fn denominator(&self) -> &BigInt {
        &self.denominator
    }
}

impl From<FractionRecord> for Fraction {
    fn from(FractionRecord { numerator, denominator }: FractionRecord) -> Self {
        Self::from_parts(numerator, denominator)
    }
}

impl From<&FractionRecord> for Fraction {
    fn from(record: &FractionRecord) -> Self {
        Self::from_like(record)
    }
}

impl From<&BigRational> for Fraction {
    fn from(ratio: &BigRational) -> Self {
        Self::from_like(ratio)
    }
}

impl From<BigInt> for Fraction {
    fn from(numerator: BigInt) -> Self {
        Self::from_parts(numerator, BigInt::one())
    }
}

macro_rules! whole_number {
    ($t:ty) => {
        impl From<$t> for Fraction {
            fn from(numerator: $t) -> Self {
                Self::from_integer(numerator)
            }
        }
    }
}

whole_number!(i8);
whole_number!(u8);
whole_number!(i16);
whole_number!(u16);
whole_number!(i32);
whole_number!(u32);
whole_number!(i64);
whole_number!(u64);
whole_number!(i128);
whole_number!(u128);
whole_number!(isize);
whole_number!(usize);
