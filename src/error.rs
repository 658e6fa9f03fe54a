//! # Errors
//!
//! The only fallible part of the crate is interpreting a loosely typed denominator argument.
use thiserror::Error;

/// Errors raised by the arithmetic mutators of a [`Fraction`](crate::Fraction).
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A denominator was supplied, but it is not an integer.
    ///
    /// `found` names the type that was received, for diagnostics only.
    #[error("illegal denominator type")]
    InvalidDenominatorType {
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
