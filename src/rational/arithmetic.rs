//! # Arithmetic
//!
//! In place addition, subtraction, multiplication and division. None of these reduce the result.
//!
//! The cooperative variants compute the same values, but yield to the executor before their
//! (concurrent) sub-computations. They only write to the receiver after their last suspension
//! point, so a dropped future leaves the receiver untouched.
use num::{BigInt, One, Zero};
use tokio::task::yield_now;

use crate::error::Result;
use crate::integer::euclidean::{gcd, gcd_async};
use crate::rational::Fraction;
use crate::rational::operand::Operand;

impl Fraction {
    /// Add a value to this fraction.
    ///
    /// The new denominator is the least common multiple of the two denominators, computed through
    /// their greatest common divisor.
    ///
    /// # Errors
    ///
    /// When the operand is an integer with a denominator that is not an integer. The fraction is
    /// not modified in that case.
    pub fn add<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        let operand: Operand<'a> = operand.into();
        let (numerator, denominator) = operand.into_parts()?;
        self.add_parts(&numerator, &denominator);
        Ok(())
    }

    /// Cooperative variant of [`Fraction::add`].
    ///
    /// The three cross terms are computed concurrently, after the greatest common divisor is
    /// known.
    pub async fn add_async<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        let operand: Operand<'a> = operand.into();
        let (numerator, denominator) = operand.into_parts()?;
        self.add_parts_async(&numerator, &denominator).await;
        Ok(())
    }

    /// Subtract a value from this fraction.
    ///
    /// Equivalent to adding the operand with its numerator negated.
    ///
    /// # Errors
    ///
    /// See [`Fraction::add`].
    pub fn subtract<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        let operand: Operand<'a> = operand.into();
        let (numerator, denominator) = operand.into_parts()?;
        self.add_parts(&-&*numerator, &denominator);
        Ok(())
    }

    /// Cooperative variant of [`Fraction::subtract`].
    pub async fn subtract_async<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        let operand: Operand<'a> = operand.into();
        let (numerator, denominator) = operand.into_parts()?;
        self.add_parts_async(&-&*numerator, &denominator).await;
        Ok(())
    }

    /// Multiply this fraction by a value.
    ///
    /// Numerators and denominators are multiplied directly, without looking for common factors.
    /// A whole number without denominator only touches the numerator.
    ///
    /// # Errors
    ///
    /// When the operand is an integer with a denominator that is not an integer. The fraction is
    /// not modified in that case.
    pub fn multiply<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        let operand: Operand<'a> = operand.into();
        match operand.into_factors()? {
            (numerator, None) => {
                self.invalidate();
                self.numerator *= &*numerator;
            },
            (numerator, Some(denominator)) => self.multiply_parts(&numerator, &denominator),
        }

        Ok(())
    }

    /// Cooperative variant of [`Fraction::multiply`].
    ///
    /// Both products are computed concurrently.
    pub async fn multiply_async<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        let operand: Operand<'a> = operand.into();
        let (numerator, denominator) = operand.into_factors()?;
        match denominator {
            None => {
                yield_now().await;
                self.invalidate();
                self.numerator *= &*numerator;
            },
            Some(denominator) => self.multiply_parts_async(&numerator, &denominator).await,
        }

        Ok(())
    }

    /// Divide this fraction by a value.
    ///
    /// Multiplies by the reciprocal: a fraction-like operand has its fields swapped, an integer
    /// `n` with denominator `d` (default one) becomes `d / n`.
    ///
    /// # Errors
    ///
    /// See [`Fraction::multiply`].
    pub fn divide<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        let operand: Operand<'a> = operand.into();
        let (numerator, denominator) = operand.into_parts()?;
        self.multiply_parts(&denominator, &numerator);
        Ok(())
    }

    /// Cooperative variant of [`Fraction::divide`].
    pub async fn divide_async<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        let operand: Operand<'a> = operand.into();
        let (numerator, denominator) = operand.into_parts()?;
        self.multiply_parts_async(&denominator, &numerator).await;
        Ok(())
    }

    fn add_parts(&mut self, numerator: &BigInt, denominator: &BigInt) {
        let divisor = common_divisor(gcd(self.denominator.clone(), denominator.clone()));

        let lcm = &self.denominator * denominator / &divisor;
        let lhs = &self.numerator * denominator / &divisor;
        let rhs = &self.denominator * numerator / &divisor;

        self.invalidate();
        self.denominator = lcm;
        self.numerator = lhs + rhs;
    }

    async fn add_parts_async(&mut self, numerator: &BigInt, denominator: &BigInt) {
        let divisor = gcd_async(self.denominator.clone(), denominator.clone()).await;
        let divisor = common_divisor(divisor);
        yield_now().await;

        let (this_numerator, this_denominator) = (&self.numerator, &self.denominator);
        let (lcm, lhs, rhs) = futures::join!(
            async { this_denominator * denominator / &divisor },
            async { this_numerator * denominator / &divisor },
            async { this_denominator * numerator / &divisor },
        );

        self.invalidate();
        self.denominator = lcm;
        self.numerator = lhs + rhs;
    }

    fn multiply_parts(&mut self, numerator: &BigInt, denominator: &BigInt) {
        self.invalidate();
        self.denominator *= denominator;
        self.numerator *= numerator;
    }

    async fn multiply_parts_async(&mut self, numerator: &BigInt, denominator: &BigInt) {
        yield_now().await;

        let (this_numerator, this_denominator) = (&self.numerator, &self.denominator);
        let (new_denominator, new_numerator) = futures::join!(
            async { this_denominator * denominator },
            async { this_numerator * numerator },
        );

        self.invalidate();
        self.denominator = new_denominator;
        self.numerator = new_numerator;
    }
}

/// Divisor for the cross terms of an addition.
///
/// When one of the denominators is zero, their greatest common divisor is zero too and the terms
/// are cross multiplied without any division.
fn common_divisor(gcd: BigInt) -> BigInt {
    if gcd.is_zero() {
        BigInt::one()
    } else {
        gcd
    }
}
