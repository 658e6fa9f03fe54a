//! Print the decimal expansion of a fraction.
//!
//! Numerator and denominator are plain integers; there is no fraction syntax.
use clap::Parser;
use num::BigInt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use relp_fraction::{DEFAULT_PRECISION, Fraction, Reducible, Reduction};

/// Exact decimal expansion of `NUMERATOR / DENOMINATOR`.
#[derive(Parser, Debug)]
#[command(name = "fraction", version, about)]
struct Args {
    /// Numerator, of any size.
    #[arg(allow_negative_numbers = true)]
    numerator: BigInt,
    /// Denominator, of any size. Zero and negative values are allowed.
    #[arg(allow_negative_numbers = true, default_value_t = BigInt::from(1))]
    denominator: BigInt,
    /// Maximum number of digits after the decimal point.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
    /// Bring the fraction into lowest terms before printing it.
    #[arg(short, long)]
    reduce: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Args { numerator, denominator, precision, reduce } = Args::parse();
    let mut fraction = Fraction::new(numerator, denominator);

    if reduce {
        match fraction.reduce_with(|divisor| divisor) {
            Reduction::Irreducible(_) => info!("already in lowest terms"),
            Reduction::Reduced(divisor) => info!(%divisor, "reduced"),
        }
    }

    println!("{} / {}", fraction.numerator(), fraction.denominator());
    println!("{}", fraction.to_decimal_string(precision));
}
