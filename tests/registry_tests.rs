use std::sync::Arc;
use std::thread;

use prospector::{
    CalculatorRegistry, DepositGenerator, DepositVariant, DistributionShape, Error, GeneratorKind,
    NaturalFloat,
};

fn generator(kind: GeneratorKind) -> DepositGenerator {
    DepositGenerator::new(
        kind,
        NaturalFloat::new(5.0, 0.0, 0.5, DistributionShape::Uniform),
        NaturalFloat::new(2.0, 0.0, 0.3, DistributionShape::Uniform),
    )
}

fn variant() -> DepositVariant {
    DepositVariant::new("nativecopper", 10.0)
}

#[test]
fn resolve_falls_back_to_parent_kind() {
    let registry = CalculatorRegistry::new();
    registry.register(GeneratorKind::Disc, |_, _, _, _| Ok(0.42));

    let result = registry
        .resolve(&generator(GeneratorKind::FollowSurfaceDisc), &variant(), 1, None)
        .unwrap();
    assert_eq!(result, Some(0.42));
}

#[test]
fn resolve_walks_the_whole_ancestor_chain() {
    let registry = CalculatorRegistry::new();
    registry.register(GeneratorKind::Base, |_, _, _, _| Ok(0.42));

    // Alluvial -> FollowSurfaceDisc -> Disc -> Base.
    let result = registry
        .resolve(&generator(GeneratorKind::Alluvial), &variant(), 1, None)
        .unwrap();
    assert_eq!(result, Some(0.42));
}

#[test]
fn unregistered_chain_resolves_to_absence() {
    let registry = CalculatorRegistry::new();
    let result = registry
        .resolve(&generator(GeneratorKind::Alluvial), &variant(), 1, None)
        .unwrap();
    assert_eq!(result, None);
}

#[test]
fn sibling_registration_does_not_leak() {
    let registry = CalculatorRegistry::new();
    registry.register(GeneratorKind::AnywhereDisc, |_, _, _, _| Ok(0.42));

    // FollowSurfaceDisc is a sibling of AnywhereDisc, not a descendant.
    let result = registry
        .resolve(&generator(GeneratorKind::FollowSurfaceDisc), &variant(), 1, None)
        .unwrap();
    assert_eq!(result, None);
}

#[test]
fn default_registry_serves_the_disc_family() {
    let registry = CalculatorRegistry::with_default();

    for kind in [
        GeneratorKind::Disc,
        GeneratorKind::FollowSurfaceDisc,
        GeneratorKind::FollowSeaLevelDisc,
        GeneratorKind::AnywhereDisc,
        GeneratorKind::Alluvial,
    ] {
        let result = registry.resolve(&generator(kind), &variant(), 1571, None).unwrap();
        assert!(result.is_some(), "{kind:?} did not resolve");
        let p = result.unwrap();
        assert!((0.0..=1.0).contains(&p), "{kind:?} gave {p}");
    }

    // ChildDeposit descends from Base, not Disc: no calculator applies.
    let result = registry
        .resolve(&generator(GeneratorKind::ChildDeposit), &variant(), 1571, None)
        .unwrap();
    assert_eq!(result, None);
}

#[test]
fn calculator_errors_propagate() {
    let registry = CalculatorRegistry::with_default();
    let broken = DepositGenerator::new(
        GeneratorKind::Disc,
        NaturalFloat::new(0.0, 0.0, 0.5, DistributionShape::Uniform),
        NaturalFloat::new(2.0, 0.0, 0.3, DistributionShape::Uniform),
    );
    assert!(matches!(
        registry.resolve(&broken, &variant(), 100, None),
        Err(Error::NonPositiveMean { .. })
    ));
}

#[test]
fn registered_calculator_receives_the_sampled_radius() {
    let registry = CalculatorRegistry::new();
    registry.register(GeneratorKind::Disc, |_, _, _, sampled_radius| {
        assert_eq!(sampled_radius, Some(8));
        Ok(0.0)
    });
    registry
        .resolve(&generator(GeneratorKind::Disc), &variant(), 1, Some(8))
        .unwrap();
}

#[test]
fn concurrent_resolution_is_safe() {
    let registry = Arc::new(CalculatorRegistry::with_default());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for observed in 0..500 {
                    let result = registry
                        .resolve(
                            &generator(GeneratorKind::FollowSurfaceDisc),
                            &variant(),
                            observed + i,
                            None,
                        )
                        .unwrap();
                    assert!(result.is_some());
                }
            })
        })
        .collect();

    // A late registration while readers are active must not wedge.
    registry.register(GeneratorKind::ChildDeposit, |_, _, _, _| Ok(0.1));

    for handle in handles {
        handle.join().unwrap();
    }

    let result = registry
        .resolve(&generator(GeneratorKind::ChildDeposit), &variant(), 1, None)
        .unwrap();
    assert_eq!(result, Some(0.1));
}
