use bitcodec::primitives::Int64;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_add(c: &mut Criterion) {
    let a = Int64::from(0x1122334455667788u64);
    let b = Int64::from(0x0011223344556677u64);

    c.bench_function("int64 add", |bench| {
        bench.iter(|| black_box(a) + black_box(b))
    });
}

pub fn bench_parse_hex(c: &mut Criterion) {
    c.bench_function("int64 parse hex", |bench| {
        bench.iter(|| black_box("0xdeadbeefcafebabe").parse::<Int64>())
    });
}

criterion_group!(benches, bench_add, bench_parse_hex);
criterion_main!(benches);
