use criterion::criterion_main;

mod decimal;
mod euclidean;

criterion_main!(
    euclidean::euclidean,
    decimal::decimal,
);
