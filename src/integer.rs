//! # Integers
//!
//! Arbitrary precision integer utilities, currently only the Euclidean algorithm.
pub mod euclidean;
