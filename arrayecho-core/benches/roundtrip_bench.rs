use arrayecho_core::ArrayEchoService;
use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use std::io::Cursor;

fn bench_roundtrip(c: &mut Criterion) {
    let len = 100_000i64;
    let mut input = len.to_string();
    for i in 0..len {
        input.push(' ');
        input.push_str(&(i - len / 2).to_string());
    }
    let input = input.into_bytes();
    let mut output: Vec<u8> = Vec::with_capacity(8 * len as usize);

    c.bench_function("roundtrip_100k", |b| {
        b.iter(|| {
            output.clear();
            let mut service = ArrayEchoService::new(Cursor::new(input.as_slice()), &mut output);
            service.run().unwrap();
            drop(service);
            black_box(&output);
        });
    });
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
