/// Shorthand for creating a fraction, mostly in tests.
///
/// `F!(n)` is the whole number `n / 1`, `F!(n, d)` is `n / d` without any reduction.
#[macro_export]
macro_rules! F {
    ($value:expr) => {
        $crate::Fraction::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction::new($numer, $denom)
    };
}
