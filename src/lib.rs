//! # Exact fractions
//!
//! Mutable fractions over arbitrary precision integers, kept in lowest terms on request through
//! a Euclidean greatest common divisor. Every operation has a cooperative `async` counterpart that
//! yields to the executor between steps, so that very large operands don't starve other tasks.
//!
//! Nothing is normalized implicitly: denominators can be zero or negative, and a fraction is only
//! reduced when [`Reducible::reduce`] (or one of its variants) is called.
pub use error::{Error, Result};
pub use integer::euclidean::{gcd, gcd_async};
pub use rational::{DEFAULT_PRECISION, Fraction};
pub use rational::operand::{Denominator, FractionLike, FractionRecord, Operand, is_fraction_like};
pub use rational::reduce::{IRREDUCIBLE, Irreducible, Reducible, Reduction};

pub mod error;
pub mod integer;
pub mod rational;
