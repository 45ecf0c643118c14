use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hamming84::ecc::{decode_stream, encode, BitFlipChannel, NoiselessChannel};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn generate_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 7 + 13) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in [1024, 16 * 1024, 256 * 1024] {
        let data = generate_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in [1024, 16 * 1024, 256 * 1024] {
        let encoded = encode(&generate_data(size));
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("noiseless", size), &encoded, |b, encoded| {
            b.iter(|| decode_stream(black_box(encoded), &mut NoiselessChannel, &mut ()))
        });

        group.bench_with_input(BenchmarkId::new("noisy", size), &encoded, |b, encoded| {
            let mut channel =
                BitFlipChannel::with_default_probability(ChaCha20Rng::seed_from_u64(42));
            b.iter(|| decode_stream(black_box(encoded), &mut channel, &mut ()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
