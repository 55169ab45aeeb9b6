//! WOTS Benchmarks
//!
//! Key generation, signing and verification for the four preset parameter
//! sets using the Criterion framework. Signing consumes the key, so every
//! signing iteration gets a freshly generated key outside the timed section.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::rng;
use wots::{OneTimeSigner, WotsSha256W16, WotsSha256W4, WotsSha512W16, WotsSha512W4};
use wots_bench::TEST_MESSAGE;

fn keygen_variant<S: OneTimeSigner>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group("WOTS KeyGen");
    group.throughput(Throughput::Elements(1));

    group.bench_function(name, |b| {
        b.iter_batched(
            rng,
            |mut rng| black_box(S::keygen(&mut rng).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn sign_variant<S: OneTimeSigner>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group("WOTS Sign");
    group.throughput(Throughput::Elements(1));

    group.bench_function(name, |b| {
        b.iter_batched(
            || S::keygen(&mut rng()).unwrap().0,
            |sk| black_box(S::sign(sk, TEST_MESSAGE).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn verify_variant<S: OneTimeSigner>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group("WOTS Verify");
    group.throughput(Throughput::Elements(1));

    let (sk, pk) = S::keygen(&mut rng()).unwrap();
    let sig = S::sign(sk, TEST_MESSAGE).unwrap();

    group.bench_function(name, |b| {
        b.iter(|| black_box(S::verify(&pk, TEST_MESSAGE, &sig)))
    });

    group.finish();
}

/// Benchmark key generation for all presets.
fn bench_keygen(c: &mut Criterion) {
    keygen_variant::<WotsSha256W4>(c, "WOTS-SHA256-W4");
    keygen_variant::<WotsSha256W16>(c, "WOTS-SHA256-W16");
    keygen_variant::<WotsSha512W4>(c, "WOTS-SHA512-W4");
    keygen_variant::<WotsSha512W16>(c, "WOTS-SHA512-W16");
}

/// Benchmark signing for all presets.
fn bench_sign(c: &mut Criterion) {
    sign_variant::<WotsSha256W4>(c, "WOTS-SHA256-W4");
    sign_variant::<WotsSha256W16>(c, "WOTS-SHA256-W16");
    sign_variant::<WotsSha512W4>(c, "WOTS-SHA512-W4");
    sign_variant::<WotsSha512W16>(c, "WOTS-SHA512-W16");
}

/// Benchmark verification for all presets.
fn bench_verify(c: &mut Criterion) {
    verify_variant::<WotsSha256W4>(c, "WOTS-SHA256-W4");
    verify_variant::<WotsSha256W16>(c, "WOTS-SHA256-W16");
    verify_variant::<WotsSha512W4>(c, "WOTS-SHA512-W4");
    verify_variant::<WotsSha512W16>(c, "WOTS-SHA512-W16");
}

criterion_group!(benches, bench_keygen, bench_sign, bench_verify);
criterion_main!(benches);
