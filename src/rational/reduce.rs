//! # Reduction
//!
//! Bringing fractions into lowest terms, and memoizing whether they already are.
use std::future::Future;

use num::{BigInt, One, Zero};
use tracing::debug;

use crate::integer::euclidean::{gcd, gcd_async};
use crate::rational::Fraction;

/// Marker for "already in lowest terms, nothing was reduced".
///
/// There is exactly one value of this type, [`IRREDUCIBLE`]. It can't be constructed outside of
/// this crate.
#[derive(Debug, Eq, PartialEq)]
pub struct Irreducible {
    _private: (),
}

/// The only [`Irreducible`] value.
pub static IRREDUCIBLE: Irreducible = Irreducible { _private: () };

impl Irreducible {
    pub fn instance() -> &'static Self {
        &IRREDUCIBLE
    }
}

/// Outcome of a reduction attempt.
#[derive(Debug, Eq, PartialEq)]
pub enum Reduction<T> {
    /// The value was already irreducible, the callback was not called.
    Irreducible(&'static Irreducible),
    /// The value was divided by a common factor, contains what the callback returned.
    Reduced(T),
}

impl<T> Reduction<T> {
    pub fn is_irreducible(&self) -> bool {
        matches!(self, Reduction::Irreducible(_))
    }

    /// The value returned by the callback, if it was called.
    pub fn reduced(self) -> Option<T> {
        match self {
            Reduction::Irreducible(_) => None,
            Reduction::Reduced(value) => Some(value),
        }
    }
}

/// Something that can be in lowest terms, or be brought there.
pub trait Reducible {
    /// Whether the numerator and denominator have no common factor other than one.
    ///
    /// Doesn't modify the value.
    fn is_irreducible(&self) -> bool;

    /// Divide numerator and denominator by their greatest common divisor.
    fn reduce(&mut self) -> Reduction<()> {
        self.reduce_with(|_| ())
    }

    /// Divide numerator and denominator by their greatest common divisor.
    ///
    /// # Arguments
    ///
    /// * `callback`: Receives the greatest common divisor, only called when it is larger than one.
    ///
    /// # Return value
    ///
    /// What the callback returned, or the irreducible marker if there was nothing to divide by.
    fn reduce_with<T, F: FnOnce(BigInt) -> T>(&mut self, callback: F) -> Reduction<T>;

    /// Cooperative variant of [`Reducible::reduce_with`].
    ///
    /// The future returned by the callback runs concurrently with the divisions. The value is
    /// only written once both have finished.
    fn reduce_async<T, F, Fut>(&mut self, callback: F) -> impl Future<Output = Reduction<T>>
    where
        F: FnOnce(BigInt) -> Fut,
        Fut: Future<Output = T>;
}

impl Reducible for Fraction {
    /// Computed once and memoized until the next modification.
    fn is_irreducible(&self) -> bool {
        match self.irreducible.get() {
            Some(known) => known,
            None => {
                let known = gcd(self.denominator.clone(), self.numerator.clone()).is_one();
                self.irreducible.set(Some(known));
                known
            },
        }
    }

    fn reduce_with<T, F: FnOnce(BigInt) -> T>(&mut self, callback: F) -> Reduction<T> {
        let divisor = gcd(self.denominator.clone(), self.numerator.clone());
        if divisor.is_zero() || divisor.is_one() {
            self.irreducible.set(Some(true));
            return Reduction::Irreducible(&IRREDUCIBLE);
        }

        debug!(%divisor, "reducing fraction");
        self.invalidate();
        let result = callback(divisor.clone());
        self.denominator /= &divisor;
        self.numerator /= &divisor;
        self.irreducible.set(Some(true));

        Reduction::Reduced(result)
    }

    async fn reduce_async<T, F, Fut>(&mut self, callback: F) -> Reduction<T>
    where
        F: FnOnce(BigInt) -> Fut,
        Fut: Future<Output = T>,
    {
        let divisor = gcd_async(self.denominator.clone(), self.numerator.clone()).await;
        if divisor.is_zero() || divisor.is_one() {
            self.irreducible.set(Some(true));
            return Reduction::Irreducible(&IRREDUCIBLE);
        }

        debug!(%divisor, "reducing fraction cooperatively");
        let (this_numerator, this_denominator) = (&self.numerator, &self.denominator);
        let (result, denominator, numerator) = futures::join!(
            callback(divisor.clone()),
            async { this_denominator / &divisor },
            async { this_numerator / &divisor },
        );

        self.denominator = denominator;
        self.numerator = numerator;
        self.irreducible.set(Some(true));

        Reduction::Reduced(result)
    }
}

impl Reducible for &'static Irreducible {
    fn is_irreducible(&self) -> bool {
        true
    }

    fn reduce_with<T, F: FnOnce(BigInt) -> T>(&mut self, _callback: F) -> Reduction<T> {
        Reduction::Irreducible(*self)
    }

    async fn reduce_async<T, F, Fut>(&mut self, _callback: F) -> Reduction<T>
    where
        F: FnOnce(BigInt) -> Fut,
        Fut: Future<Output = T>,
    {
        Reduction::Irreducible(*self)
    }
}
