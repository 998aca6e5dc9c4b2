use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use libsa::SuffixArray;
use rand::random;

fn gen_sample(len: usize, scale: u8) -> Vec<u8> {
    let mut v = Vec::with_capacity(len + 1);
    for _ in 0..len {
        v.push(1 + random::<u8>() % scale);
    }
    v.push(0);
    v
}

fn sa_construct(crit: &mut Criterion) {
    let mut group = crit.benchmark_group("sa_construct");
    for &len in &[4096usize, 65536, 1 << 20] {
        let sample = gen_sample(len, 200);
        group.bench_with_input(BenchmarkId::from_parameter(len), &sample, |b, sample| {
            b.iter(|| SuffixArray::new(sample).unwrap());
        });
    }
    group.finish();
}

criterion_group!(sa_construct_benches, sa_construct);
criterion_main!(sa_construct_benches);
