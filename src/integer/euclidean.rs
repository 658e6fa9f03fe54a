//! # Euclidean algorithm
//!
//! Greatest common divisor of two signed arbitrary precision integers.
//!
//! The divisor is used as a "can this fraction be reduced" signal rather than as a number
//! theoretic quantity: when either argument is zero, the result is zero instead of the absolute
//! value of the other argument.
use std::mem;

use num::{BigInt, Signed, Zero};
use tracing::trace;

/// Compute the greatest common divisor of two integers.
///
/// The result is never negative. If either `a` or `b` is zero, the result is zero.
///
/// # Arguments
///
/// * `a`: First integer, of any sign.
/// * `b`: Second integer, of any sign.
pub fn gcd(a: impl Into<BigInt>, b: impl Into<BigInt>) -> BigInt {
    match Euclid::start(a.into(), b.into()) {
        Start::Done(divisor) => divisor,
        Start::Running(mut euclid) => loop {
            if let Some(divisor) = euclid.step() {
                break divisor;
            }
        },
    }
}

/// Compute the greatest common divisor of two integers cooperatively.
///
/// Produces exactly the same value as [`gcd`], but yields back to the executor after every
/// modulus step. The future never fails.
///
/// Yielding goes through `tokio::task::yield_now`, which reschedules immediately when no Tokio
/// runtime is active, so any executor can drive this future.
pub async fn gcd_async(a: impl Into<BigInt>, b: impl Into<BigInt>) -> BigInt {
    match Euclid::start(a.into(), b.into()) {
        Start::Done(divisor) => divisor,
        Start::Running(mut euclid) => {
            let mut steps = 1_usize;
            loop {
                if let Some(divisor) = euclid.step() {
                    trace!(steps, "cooperative gcd resolved");
                    break divisor;
                }
                steps += 1;
                tokio::task::yield_now().await;
            }
        }
    }
}

/// Either the answer is known without iterating, or the iteration can begin.
enum Start {
    Done(BigInt),
    Running(Euclid),
}

/// State of the iteration, with `greater > lesser > 0`.
struct Euclid {
    greater: BigInt,
    lesser: BigInt,
}

impl Euclid {
    fn start(a: BigInt, b: BigInt) -> Start {
        if a.is_zero() || b.is_zero() {
            return Start::Done(BigInt::zero());
        }
        if a == b {
            return Start::Done(a.abs());
        }

        let (m, n) = (a.abs(), b.abs());
        match m.cmp(&n) {
            std::cmp::Ordering::Less => Start::Running(Self { greater: n, lesser: m }),
            std::cmp::Ordering::Equal => Start::Done(m),
            std::cmp::Ordering::Greater => Start::Running(Self { greater: m, lesser: n }),
        }
    }

    /// Do a single modulus step.
    ///
    /// # Return value
    ///
    /// The divisor once the remainder reaches zero, `None` while there is work left.
    fn step(&mut self) -> Option<BigInt> {
        let remainder = &self.greater % &self.lesser;
        if remainder.is_zero() {
            Some(mem::take(&mut self.lesser))
        } else {
            self.greater = mem::replace(&mut self.lesser, remainder);
            None
        }
    }
}
