use criterion::{black_box, Criterion, criterion_group};

use relp_fraction::{F, Reducible};

pub fn render_repeating(c: &mut Criterion) {
    let seventh = F!(1, 7);
    c.bench_function("render 1/7 with default precision", |b| b.iter(|| {
        black_box(&seventh).to_string()
    }));
}

pub fn harmonic_sum(c: &mut Criterion) {
    c.bench_function("sum and reduce the first 100 harmonic terms", |b| b.iter(|| {
        let mut sum = F!(0);
        for n in 1..=100_u32 {
            sum.add((1, black_box(n))).unwrap();
        }
        sum.reduce();
        sum
    }));
}

criterion_group!(decimal,
    render_repeating,
    harmonic_sum,
);
