use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metro_walk::distributions::{GaussianProposal, StandardGaussian};
use metro_walk::metropolis_hastings::{metropolis_hastings, MetropolisHastings};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_scalar(c: &mut Criterion) {
    c.bench_function("mh standard normal 10k", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| {
            metropolis_hastings(
                &StandardGaussian,
                &GaussianProposal,
                black_box(1.0),
                0.0_f64,
                black_box(10_000),
                &mut rng,
            )
        })
    });
}

fn bench_vector(c: &mut Criterion) {
    c.bench_function("mh isotropic gaussian 8d 10k", |b| {
        let mut mh = MetropolisHastings::new(StandardGaussian, GaussianProposal, 0.5, vec![0.0_f64; 8])
            .set_seed(42);
        b.iter(|| mh.run(black_box(10_000)))
    });
}

criterion_group!(benches, bench_scalar, bench_vector);
criterion_main!(benches);
