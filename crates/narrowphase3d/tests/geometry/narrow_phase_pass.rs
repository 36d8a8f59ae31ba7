use narrowphase3d::math::{Isometry, Point, Vector};
use narrowphase3d::pipeline::{
    BodyId, Collider, ColliderSet, NarrowPhase, NarrowPhaseError, ShapeId, ShapePair,
};
use narrowphase3d::query::{ContactManifoldInfo, DispatchTable, NarrowPhaseConfig};
use narrowphase3d::shape::{Ball, Capsule, ConvexPolyhedron, ConvexShape, Cuboid, ShapeType};

fn tetrahedron() -> ConvexShape {
    let points = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.8, 0.0, 0.0),
        Point::new(0.0, 0.8, 0.0),
        Point::new(0.0, 0.0, 0.8),
    ];
    let faces = [[0u32, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
    ConvexPolyhedron::from_convex_mesh(points, &faces)
        .unwrap()
        .into()
}

// A pile of shapes of every kind, close enough for many of them to touch.
fn scene() -> (ColliderSet, Vec<ShapePair>) {
    let mut rng = oorandom::Rand32::new(1234);
    let mut colliders = ColliderSet::new();
    let mut handles = Vec::new();

    for i in 0..40 {
        let shape: ConvexShape = match i % 4 {
            0 => Ball::new(0.4).unwrap().into(),
            1 => Cuboid::new(Vector::new(0.4, 0.3, 0.5)).unwrap().into(),
            2 => Capsule::new_y(0.3, 0.2).unwrap().into(),
            _ => tetrahedron(),
        };
        let translation = Vector::from_fn(|_, _| rng.rand_float() * 3.0);
        let axisangle = Vector::from_fn(|_, _| rng.rand_float() * 3.0);
        let collider = Collider::new(shape, Isometry::new(translation, axisangle), BodyId(i));
        handles.push(colliders.insert(collider));
    }

    let mut pairs = Vec::new();
    for (i, h1) in handles.iter().enumerate() {
        for h2 in &handles[i + 1..] {
            let aabb1 = colliders.get(*h1).unwrap().compute_aabb();
            let aabb2 = colliders.get(*h2).unwrap().compute_aabb();

            if aabb1.intersects(&aabb2) {
                pairs.push(ShapePair::new(*h1, *h2));
            }
        }
    }

    (colliders, pairs)
}

fn sequential_pass(colliders: &ColliderSet, pairs: &[ShapePair]) -> Vec<ContactManifoldInfo> {
    let table = DispatchTable::new();
    let config = NarrowPhaseConfig::default();

    pairs
        .iter()
        .filter_map(|pair| {
            let co1 = colliders.get(pair.shape1).unwrap();
            let co2 = colliders.get(pair.shape2).unwrap();
            let mut manifold =
                ContactManifoldInfo::new(pair.shape1, pair.shape2, co1.position, co2.position);
            table
                .dispatch(&co1.shape, &co2.shape, &config, &mut manifold)
                .unwrap();
            (!manifold.is_empty()).then_some(manifold)
        })
        .collect()
}

#[test]
fn pass_matches_pair_by_pair_dispatch() {
    let (colliders, pairs) = scene();
    assert!(!pairs.is_empty());

    let mut narrow_phase = NarrowPhase::new();
    let report = narrow_phase.update(&colliders, &pairs);

    assert!(report.failures.is_empty());
    assert!(!report.manifolds.is_empty());
    assert_eq!(report.manifolds, sequential_pass(&colliders, &pairs));

    for manifold in &report.manifolds {
        assert!(manifold.validate(4));
    }

    // Running the same pass twice gives the same result.
    let again = narrow_phase.update(&colliders, &pairs);
    assert_eq!(again, report);

    let snapshot = narrow_phase.debug_snapshot();
    let expected: usize = report.manifolds.iter().map(|m| m.len()).sum();
    assert_eq!(snapshot.num_contacts(), expected);
    assert_eq!(snapshot.world_points1().count(), expected);
}

#[test]
fn failures_are_reported_per_pair() {
    let (colliders, mut pairs) = scene();
    let num_valid = pairs.len();
    let missing = ShapeId::new(1000);
    pairs.push(ShapePair::new(missing, pairs[0].shape1));

    let mut narrow_phase = NarrowPhase::new();
    let _ = narrow_phase
        .dispatcher_mut()
        .unregister(ShapeType::Capsule, ShapeType::ConvexPolyhedron);
    let report = narrow_phase.update(&colliders, &pairs);

    assert!(report
        .failures
        .contains(&(pairs[num_valid], NarrowPhaseError::UnknownShape(missing))));

    for (pair, err) in &report.failures {
        if let NarrowPhaseError::Unsupported(err) = err {
            let kind1 = colliders.get(pair.shape1).unwrap().shape.shape_type();
            let kind2 = colliders.get(pair.shape2).unwrap().shape.shape_type();
            assert_eq!((err.kind1, err.kind2), (kind1, kind2));
            assert!(
                [kind1, kind2].contains(&ShapeType::Capsule)
                    && [kind1, kind2].contains(&ShapeType::ConvexPolyhedron)
            );
        }
    }

    // Every other pair is processed normally.
    assert!(!report.manifolds.is_empty());
}
