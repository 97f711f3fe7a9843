use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{Affine, ScalarField};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_scalar(rng: &mut StdRng) -> ScalarField {
    ScalarField::from_bytes_reduced(&rng.random())
}

fn bench_mul_generator(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("mul_generator", |bencher| {
        bencher.iter(|| black_box(Affine::mul_generator(black_box(&scalar))))
    });
}

fn bench_double_scalar_mul_basepoint(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let point = Affine::mul_generator(&random_scalar(&mut rng));
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);

    c.bench_function("double_scalar_mul_basepoint", |bencher| {
        bencher.iter(|| {
            black_box(Affine::double_scalar_mul_basepoint(
                black_box(&a),
                black_box(&b),
                black_box(&point),
            ))
        })
    });
}

fn bench_coordinates(c: &mut Criterion) {
    let point = Affine::generator().negate();
    c.bench_function("affine_coordinates", |bencher| {
        bencher.iter(|| black_box(black_box(&point).coordinates()))
    });
}

criterion_group!(
    benches,
    bench_mul_generator,
    bench_double_scalar_mul_basepoint,
    bench_coordinates
);
criterion_main!(benches);
