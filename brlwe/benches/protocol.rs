use brlwe::{Ciphertext, KeyPair, Parameters, Poly, Ring, Source, decrypt, encrypt, keygen};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn protocol(c: &mut Criterion) {
    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("protocol");

    for params in [
        Parameters::ENC2,
        Parameters::ENC3,
        Parameters::NTT128,
        Parameters::NTT256,
    ] {
        let ring: Ring = Ring::new(params).unwrap();
        let mut source: Source = Source::new([0u8; 32]);
        let mut a: Poly = ring.new_poly().unwrap();
        ring.fill_uniform(&mut source, &mut a).unwrap();
        let keys: KeyPair = keygen(&ring, &a, &mut source).unwrap();
        let message: Vec<u8> = (0..ring.n()).map(|i| (i & 1) as u8).collect();
        let ct: Ciphertext = encrypt(&ring, &a, &keys.public, &message, &mut source).unwrap();

        let id = |name: &str| BenchmarkId::new(name, format!("{}", params));

        b.bench_with_input(id("keygen"), &(), |b: &mut criterion::Bencher<'_>, _| {
            b.iter(|| keygen(&ring, &a, &mut source).unwrap())
        });
        b.bench_with_input(id("encrypt"), &(), |b: &mut criterion::Bencher<'_>, _| {
            b.iter(|| encrypt(&ring, &a, &keys.public, &message, &mut source).unwrap())
        });
        b.bench_with_input(id("decrypt"), &(), |b: &mut criterion::Bencher<'_>, _| {
            b.iter(|| decrypt(&ring, &ct, &keys.secret).unwrap())
        });
    }
}

criterion_group!(benches, protocol);
criterion_main!(benches);
