use criterion::{black_box, Criterion, criterion_group};
use futures::executor::block_on;
use num::BigInt;

use relp_fraction::{gcd, gcd_async};

/// Consecutive Fibonacci numbers, the worst case for the Euclidean algorithm.
fn fibonacci_pair(n: usize) -> (BigInt, BigInt) {
    let (mut a, mut b) = (BigInt::from(1), BigInt::from(1));
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    (a, b)
}

pub fn gcd_small(c: &mut Criterion) {
    c.bench_function("gcd of small integers", |b| b.iter(|| {
        gcd(black_box(-30), black_box(105))
    }));
}

pub fn gcd_fibonacci(c: &mut Criterion) {
    let (x, y) = fibonacci_pair(1000);
    c.bench_function("gcd of consecutive Fibonacci numbers", |b| b.iter(|| {
        gcd(black_box(x.clone()), black_box(y.clone()))
    }));
}

pub fn gcd_async_fibonacci(c: &mut Criterion) {
    let (x, y) = fibonacci_pair(1000);
    c.bench_function("cooperative gcd of consecutive Fibonacci numbers", |b| b.iter(|| {
        block_on(gcd_async(black_box(x.clone()), black_box(y.clone())))
    }));
}

criterion_group!(euclidean,
    gcd_small,
    gcd_fibonacci,
    gcd_async_fibonacci,
);
