use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use nifvalido_engine::{nif_valido, normalize};
mod common;

fn bench_nif_valido(c: &mut Criterion) {
    let inputs = common::sample_inputs();
    let mut group = c.benchmark_group("validate");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("nif_valido", |b| {
        b.iter(|| {
            for input in &inputs {
                std::hint::black_box(nif_valido(std::hint::black_box(input)));
            }
        });
    });

    group.bench_function("normalize", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = std::hint::black_box(normalize(std::hint::black_box(input)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_nif_valido);
criterion_main!(benches);
