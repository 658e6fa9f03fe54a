//! # Decimal rendering
//!
//! Exact decimal expansion by long division, truncated after a number of digits.
use std::fmt;

use itertools::Itertools;
use num::{BigInt, Integer, Signed, Zero};
use num::bigint::Sign;

use crate::rational::{DEFAULT_PRECISION, Fraction};

impl Fraction {
    /// Render as a decimal number with at most `precision` digits after the decimal point.
    ///
    /// The expansion stops early when it terminates, and is truncated (not rounded) otherwise.
    /// The decimal point is always present, also for whole numbers (`"1."`). A zero denominator
    /// renders as `"Infinity"`, `"-Infinity"` or `"NaN"`.
    pub fn to_decimal_string(&self, precision: usize) -> String {
        render(&self.numerator, &self.denominator, precision)
    }
}

/// Renders [`DEFAULT_PRECISION`] digits, unless the formatter specifies a precision.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_str(&self.to_decimal_string(precision))
    }
}

fn render(numerator: &BigInt, denominator: &BigInt, precision: usize) -> String {
    if denominator.is_zero() {
        return match numerator.sign() {
            Sign::NoSign => "NaN",
            Sign::Plus => "Infinity",
            Sign::Minus => "-Infinity",
        }.to_string();
    }
    if denominator.is_negative() {
        return render(&-numerator, &-denominator, precision);
    }
    if numerator.is_negative() {
        return format!("-{}", render(&-numerator, denominator, precision));
    }

    let (quotient, mut remainder) = numerator.div_rem(denominator);
    // denominator * 1, ..., denominator * 9
    let multiples = (1..=9_u32).map(|k| denominator * k).collect_vec();

    let mut digits = String::new();
    while digits.len() < precision && !remainder.is_zero() {
        remainder *= 10_u32;
        let digit = multiples.iter().take_while(|&multiple| multiple <= &remainder).count();
        if digit > 0 {
            remainder -= &multiples[digit - 1];
        }
        digits.push(char::from(b'0' + digit as u8));
    }

    format!("{}.{}", quotient, digits)
}
