//! The cooperative variants, driven by a Tokio runtime.
use std::cell::Cell;
use std::future::pending;
use std::ptr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use num::BigInt;

use relp_fraction::{Error, F, Fraction, FractionRecord, IRREDUCIBLE, Reducible, Reduction};
use relp_fraction::{gcd, gcd_async};

fn assert_parts(fraction: &Fraction, numerator: i64, denominator: i64) {
    assert_eq!(fraction.numerator(), &BigInt::from(numerator));
    assert_eq!(fraction.denominator(), &BigInt::from(denominator));
}

#[tokio::test]
async fn gcd_async_matches_gcd() {
    assert_eq!(gcd_async(11, 0).await, BigInt::from(0));
    assert_eq!(gcd_async(12, 15).await, BigInt::from(3));
    assert_eq!(gcd_async(1, -1).await, BigInt::from(1));

    let a = BigInt::from(3).pow(120) * BigInt::from(2).pow(40);
    let b: BigInt = BigInt::from(3).pow(80) * 7;
    assert_eq!(gcd_async(a.clone(), b.clone()).await, gcd(a, b));
}

#[tokio::test]
async fn gcd_async_yields_to_other_tasks() {
    // Consecutive Fibonacci numbers take the most steps.
    let (mut a, mut b) = (BigInt::from(1), BigInt::from(1));
    for _ in 0..500 {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }

    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    tokio::spawn(async move {
        flag.store(true, Ordering::SeqCst);
    });

    assert_eq!(gcd_async(a, b).await, BigInt::from(1));
    assert!(ran.load(Ordering::SeqCst));
}

#[tokio::test]
async fn add() {
    let mut a = Fraction::default();
    a.add_async(1).await.unwrap();
    assert_parts(&a, 1, 1);

    let mut a = F!(1, 2);
    a.add_async((1, 3)).await.unwrap();
    assert_parts(&a, 5, 6);

    let mut a = F!(1, 2);
    a.add_async((1, BigInt::from(3))).await.unwrap();
    assert_parts(&a, 5, 6);
}

#[tokio::test]
async fn add_illegal_denominator() {
    let mut a = Fraction::default();
    let error = a.add_async((0, "1")).await.unwrap_err();
    assert!(matches!(error, Error::InvalidDenominatorType { .. }));
    assert_eq!(error.to_string(), "illegal denominator type");
    assert_parts(&a, 0, 1);
}

#[tokio::test]
async fn subtract() {
    let mut a = F!(1);
    a.subtract_async((1, 2)).await.unwrap();
    assert_parts(&a, 1, 2);

    let mut a = F!(1, 3);
    a.subtract_async(&F!(1, 2)).await.unwrap();
    assert_parts(&a, -1, 6);

    let mut a = F!(1, 2);
    a.subtract_async(FractionRecord::new(1, 3)).await.unwrap();
    assert_parts(&a, 1, 6);
}

#[tokio::test]
async fn subtract_whole_number() {
    let mut a = F!(5, 2);
    a.subtract_async(2).await.unwrap();
    assert_parts(&a, 1, 2);

    let mut a = F!(1, 3);
    a.subtract_async(BigInt::from(-1)).await.unwrap();
    assert_parts(&a, 4, 3);
}

#[tokio::test]
async fn subtract_illegal_denominator() {
    let mut a = F!(1, 2);
    let error = a.subtract_async((1, "3")).await.unwrap_err();
    assert_eq!(error, Error::InvalidDenominatorType { found: "&str" });
    assert_eq!(error.to_string(), "illegal denominator type");
    assert_parts(&a, 1, 2);
}

#[tokio::test]
async fn multiply() {
    let mut a = F!(2);
    a.multiply_async(&F!(1, 2)).await.unwrap();
    assert!(!a.is_irreducible());
    a.reduce_async(|gcd| async move { gcd }).await;
    assert_parts(&a, 1, 1);

    let mut a = F!(2);
    a.multiply_async((1, 2)).await.unwrap();
    assert!(!a.is_irreducible());
    a.reduce_async(|gcd| async move { gcd }).await;
    assert_parts(&a, 1, 1);

    let mut a = F!(3, 5);
    a.multiply_async(2).await.unwrap();
    assert_parts(&a, 6, 5);
}

#[tokio::test]
async fn multiply_illegal_denominator() {
    let mut a = F!(1);
    let error = a.multiply_async((1, "1")).await.unwrap_err();
    assert_eq!(error.to_string(), "illegal denominator type");
    assert_parts(&a, 1, 1);
}

#[tokio::test]
async fn divide() {
    let mut a = F!(1);
    a.divide_async(2).await.unwrap();
    assert_parts(&a, 1, 2);

    let mut a = F!(1);
    a.divide_async(&F!(1, 2)).await.unwrap();
    assert_parts(&a, 2, 1);
}

#[tokio::test]
async fn divide_integer_with_denominator() {
    let mut a = F!(1);
    a.divide_async((2, 3)).await.unwrap();
    assert_parts(&a, 3, 2);

    let mut a = F!(4, 5);
    a.divide_async((-2, BigInt::from(7))).await.unwrap();
    assert_parts(&a, 28, -10);
}

#[tokio::test]
async fn divide_illegal_denominator() {
    let mut a = F!(3, 4);
    let error = a.divide_async((2, 0.5)).await.unwrap_err();
    assert_eq!(error, Error::InvalidDenominatorType { found: "f64" });
    assert_eq!(error.to_string(), "illegal denominator type");
    assert_parts(&a, 3, 4);
}

#[tokio::test]
async fn reduce_irreducible() {
    let mut a = F!(1);
    let reduction = a.reduce_async(|gcd| async move { gcd }).await;
    let mut marker = match reduction {
        Reduction::Irreducible(marker) => marker,
        Reduction::Reduced(_) => panic!("1 is irreducible"),
    };
    assert!(ptr::eq(marker, &IRREDUCIBLE));

    let again = marker.reduce_async(|gcd| async move { gcd }).await;
    assert!(matches!(again, Reduction::Irreducible(m) if ptr::eq(m, &IRREDUCIBLE)));
}

#[tokio::test]
async fn reduce_with_callback() {
    let mut a = F!(32, 48);
    let reduction = a.reduce_async(|gcd| async move {
        tokio::task::yield_now().await;
        gcd
    }).await;
    assert_eq!(reduction, Reduction::Reduced(BigInt::from(16)));
    assert_parts(&a, 2, 3);
    assert!(a.is_irreducible());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn independent_fractions_on_worker_threads() {
    let handles = (1..=8_i64)
        .map(|k| tokio::spawn(async move {
            let mut sum = Fraction::default();
            for n in 1..=k {
                sum.add_async((1, n)).await.unwrap();
            }
            sum.reduce_async(|_| async {}).await;
            sum
        }))
        .collect::<Vec<_>>();

    let mut expected = Fraction::default();
    for (k, handle) in (1..=8_i64).zip(handles) {
        expected.add((1, k)).unwrap();
        let mut reduced = expected.clone();
        reduced.reduce();
        assert_eq!(handle.await.unwrap(), reduced);
    }
}

#[tokio::test]
async fn dropped_reduction_leaves_fraction_untouched() {
    let mut a = F!(32, 48);
    assert!(!a.is_irreducible());

    let called = Cell::new(false);
    {
        let reduction = a.reduce_async(|gcd| {
            called.set(true);
            async move {
                pending::<()>().await;
                gcd
            }
        });
        futures::pin_mut!(reduction);
        // Drive the divisor computation until the callback is waiting.
        for _ in 0..100 {
            assert!(futures::poll!(reduction.as_mut()).is_pending());
            if called.get() {
                break;
            }
        }
        assert!(called.get());
    }

    assert_parts(&a, 32, 48);
    assert!(!a.is_irreducible());
}
