//! # Operands
//!
//! Arguments of the fraction operations. An operand is either something fraction-like, with an
//! integer numerator and denominator, or a bare integer with an optional, loosely typed
//! denominator.
use std::any::type_name;
use std::borrow::Cow;
use std::fmt::Debug;

use num::{BigInt, BigRational, One};
use tracing::debug;

use crate::error::{Error, Result};
use crate::rational::Fraction;

/// Any value that exposes an integer numerator and denominator.
pub trait FractionLike: Debug {
    fn numerator(&self) -> &BigInt;
    fn denominator(&self) -> &BigInt;
}

/// Plain numerator and denominator pair, without any behavior attached.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FractionRecord {
    pub numerator: BigInt,
    pub denominator: BigInt,
}

impl FractionRecord {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self { numerator: numerator.into(), denominator: denominator.into() }
    }
}

impl FractionLike for FractionRecord {
    fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    fn denominator(&self) -> &BigInt {
        &self.denominator
    }
}

impl FractionLike for BigRational {
    fn numerator(&self) -> &BigInt {
        self.numer()
    }

    fn denominator(&self) -> &BigInt {
        self.denom()
    }
}

/// Denominator argument accompanying a bare integer numerator.
///
/// Values that are not integers (text, floats, ...) convert into `Unsupported`, which the
/// operations reject with [`Error::InvalidDenominatorType`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Denominator {
    /// No denominator was given, the numerator is a whole number.
    Absent,
    Integer(BigInt),
    /// Name of the type that was supplied.
    Unsupported(&'static str),
}

impl Denominator {
    /// # Return value
    ///
    /// `None` when the denominator is absent.
    ///
    /// # Errors
    ///
    /// When the denominator is not an integer.
    pub fn into_integer(self) -> Result<Option<BigInt>> {
        match self {
            Denominator::Absent => Ok(None),
            Denominator::Integer(value) => Ok(Some(value)),
            Denominator::Unsupported(found) => {
                debug!(found, "rejecting denominator");
                Err(Error::InvalidDenominatorType { found })
            },
        }
    }
}

impl<T: Into<BigInt>> From<Option<T>> for Denominator {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Denominator::Absent,
            Some(value) => Denominator::Integer(value.into()),
        }
    }
}

/// Argument of an arithmetic operation on a [`Fraction`].
#[derive(Debug)]
pub enum Operand<'a> {
    Value(&'a Fraction),
    Owned(Fraction),
    Like(&'a dyn FractionLike),
    Record(FractionRecord),
    /// A numerator, possibly with a denominator.
    Integer(BigInt, Denominator),
}

impl<'a> Operand<'a> {
    /// Whether this operand has a numerator and denominator of its own.
    pub fn is_fraction_like(&self) -> bool {
        !matches!(self, Operand::Integer(..))
    }

    /// Numerator and denominator, borrowed when the operand is borrowed.
    ///
    /// An absent denominator is one.
    ///
    /// # Errors
    ///
    /// When the operand is an integer with a denominator that is not an integer.
    pub(crate) fn into_parts(self) -> Result<(Cow<'a, BigInt>, Cow<'a, BigInt>)> {
        let (numerator, denominator) = self.into_factors()?;
        Ok((numerator, denominator.unwrap_or_else(|| Cow::Owned(BigInt::one()))))
    }

    /// Like [`Operand::into_parts`], but the denominator of a whole number stays absent.
    pub(crate) fn into_factors(self) -> Result<(Cow<'a, BigInt>, Option<Cow<'a, BigInt>>)> {
        match self {
            Operand::Value(fraction) => Ok((
                Cow::Borrowed(fraction.numerator()),
                Some(Cow::Borrowed(fraction.denominator())),
            )),
            Operand::Owned(Fraction { numerator, denominator, .. }) => {
                Ok((Cow::Owned(numerator), Some(Cow::Owned(denominator))))
            },
            Operand::Like(like) => Ok((
                Cow::Borrowed(like.numerator()),
                Some(Cow::Borrowed(like.denominator())),
            )),
            Operand::Record(FractionRecord { numerator, denominator }) => {
                Ok((Cow::Owned(numerator), Some(Cow::Owned(denominator))))
            },
            Operand::Integer(numerator, denominator) => {
                let denominator = denominator.into_integer()?;
                Ok((Cow::Owned(numerator), denominator.map(Cow::Owned)))
            },
        }
    }
}

/// Whether a value would be treated as fraction-like by the operations of [`Fraction`].
///
/// Bare integers, with or without a denominator, are not fraction-like.
pub fn is_fraction_like<'a>(value: impl Into<Operand<'a>>) -> bool {
    let operand: Operand<'a> = value.into();
    operand.is_fraction_like()
}

impl<'a> From<&'a Fraction> for Operand<'a> {
    fn from(value: &'a Fraction) -> Self {
        Operand::Value(value)
    }
}

impl From<Fraction> for Operand<'_> {
    fn from(value: Fraction) -> Self {
        Operand::Owned(value)
    }
}

impl<'a> From<&'a FractionRecord> for Operand<'a> {
    fn from(value: &'a FractionRecord) -> Self {
        Operand::Like(value)
    }
}

impl From<FractionRecord> for Operand<'_> {
    fn from(value: FractionRecord) -> Self {
        Operand::Record(value)
    }
}

impl<'a> From<&'a BigRational> for Operand<'a> {
    fn from(value: &'a BigRational) -> Self {
        Operand::Like(value)
    }
}

impl<N: Into<BigInt>, D: Into<Denominator>> From<(N, D)> for Operand<'_> {
    fn from((numerator, denominator): (N, D)) -> Self {
        Operand::Integer(numerator.into(), denominator.into())
    }
}

impl From<BigInt> for Operand<'_> {
    fn from(value: BigInt) -> Self {
        Operand::Integer(value, Denominator::Absent)
    }
}

impl From<BigInt> for Denominator {
    fn from(value: BigInt) -> Self {
        Denominator::Integer(value)
    }
}

macro_rules! integer_argument {
    ($t:ty) => {
        impl From<$t> for Operand<'_> {
            fn from(value: $t) -> Self {
                Operand::Integer(value.into(), Denominator::Absent)
            }
        }

        impl From<$t> for Denominator {
            fn from(value: $t) -> Self {
                Denominator::Integer(value.into())
            }
        }
    }
}

integer_argument!(i8);
integer_argument!(u8);
integer_argument!(i16);
integer_argument!(u16);
integer_argument!(i32);
integer_argument!(u32);
integer_argument!(i64);
integer_argument!(u64);
integer_argument!(i128);
integer_argument!(u128);
integer_argument!(isize);
integer_argument!(usize);

macro_rules! unsupported_denominator {
    ($t:ty) => {
        impl From<$t> for Denominator {
            fn from(_: $t) -> Self {
                Denominator::Unsupported(type_name::<$t>())
            }
        }
    }
}

unsupported_denominator!(&str);
unsupported_denominator!(String);
unsupported_denominator!(char);
unsupported_denominator!(bool);
unsupported_denominator!(f32);
unsupported_denominator!(f64);
