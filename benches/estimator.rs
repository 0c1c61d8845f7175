use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use prospector::{
    CalculatorRegistry, DepositGenerator, DepositVariant, DiscEstimator, DistributionShape,
    GeneratorKind, NaturalFloat,
};

fn gaussian_disc(kind: GeneratorKind) -> DepositGenerator {
    DepositGenerator::new(
        kind,
        NaturalFloat::new(5.0, 0.0, 0.5, DistributionShape::Gaussian),
        NaturalFloat::new(2.0, 0.0, 0.3, DistributionShape::Gaussian),
    )
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("disc_percentile");
    let estimator = DiscEstimator::new();
    let generator = gaussian_disc(GeneratorKind::Disc);
    let variant = DepositVariant::new("nativecopper", 10.0);

    for observed in [0u64, 1571, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("observed", observed),
            &observed,
            |b, &observed| {
                b.iter(|| estimator.percentile(&generator, &variant, observed, None));
            },
        );
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_resolve");
    let registry = CalculatorRegistry::with_default();
    let variant = DepositVariant::new("nativecopper", 10.0);

    // Direct hit vs. a three-hop ancestor walk.
    for kind in [GeneratorKind::Disc, GeneratorKind::Alluvial] {
        let generator = gaussian_disc(kind);
        group.bench_with_input(
            BenchmarkId::new("kind", kind),
            &generator,
            |b, generator| {
                b.iter(|| registry.resolve(generator, &variant, 1571, None));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_percentile, bench_resolve);
criterion_main!(benches);
