//! Benchmarks for prime-field curve arithmetic on secp256k1

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curvecrypt_algorithms::ec::{parse_hex, random_scalar, FiniteFieldCurve, Point};
use curvecrypt_params::traditional::curves::SECP256K1;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn setup() -> (FiniteFieldCurve, Point, num_bigint::BigUint) {
    let curve = FiniteFieldCurve::from_domain_params(&SECP256K1).expect("valid preset");
    let g = curve
        .point(
            parse_hex("g_x", SECP256K1.g_x).expect("valid hex"),
            parse_hex("g_y", SECP256K1.g_y).expect("valid hex"),
        )
        .expect("generator on curve");
    let n = parse_hex("n", SECP256K1.n).expect("valid hex");
    (curve, g, n)
}

fn bench_group_law(c: &mut Criterion) {
    let (curve, g, _) = setup();
    let g2 = curve.point_doubling(&g).expect("doubling succeeds");

    let mut group = c.benchmark_group("secp256k1_group_law");
    group.bench_function("point_addition", |bench| {
        bench.iter(|| curve.point_addition(black_box(&g), black_box(&g2)))
    });
    group.bench_function("point_doubling", |bench| {
        bench.iter(|| curve.point_doubling(black_box(&g2)))
    });
    group.finish();
}

fn bench_scalar_multiplication(c: &mut Criterion) {
    let (curve, g, n) = setup();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let k = random_scalar(&mut rng, &n).expect("order is at least 2");

    let mut group = c.benchmark_group("secp256k1_scalar_mult");
    group.sample_size(20);
    group.bench_function("random_scalar_times_g", |bench| {
        bench.iter(|| curve.scalar_multiplication(black_box(&k), black_box(&g)))
    });
    group.finish();
}

criterion_group!(benches, bench_group_law, bench_scalar_multiplication);
criterion_main!(benches);
