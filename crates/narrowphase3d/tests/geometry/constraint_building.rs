use approx::assert_relative_eq;
use narrowphase3d::dynamics::{
    build_contact_constraints, ConstraintDiagnostics, RigidBodyProperties,
};
use narrowphase3d::math::{Isometry, Point, Vector};
use narrowphase3d::pipeline::{BodyId, Collider, ColliderSet, NarrowPhase, ShapeId, ShapePair};
use narrowphase3d::shape::{Ball, ConvexShape, Cuboid};
use narrowphase3d::utils::hashmap::HashMap;

struct Scene {
    colliders: ColliderSet,
    bodies: HashMap<BodyId, RigidBodyProperties>,
    ground: ShapeId,
    cube: ShapeId,
    pairs: Vec<ShapePair>,
}

fn scene() -> Scene {
    let mut colliders = ColliderSet::new();
    let mut bodies = HashMap::default();
    let slab = ConvexShape::from(Cuboid::new(Vector::new(10.0, 1.0, 10.0)).unwrap());

    let ground = colliders.insert(Collider::new(slab.clone(), Isometry::identity(), BodyId(0)));
    let _ = bodies.insert(BodyId(0), RigidBodyProperties::fixed(Point::origin(), 0.8));

    let cube_shape = ConvexShape::from(Cuboid::new(Vector::repeat(0.5)).unwrap());
    let cube_pos = Isometry::translation(0.0, 1.45, 0.0);
    let cube_props = cube_shape.mass_properties(1.0);
    let cube = colliders.insert(Collider::new(cube_shape, cube_pos, BodyId(1)));
    let _ = bodies.insert(
        BodyId(1),
        RigidBodyProperties::from_mass_properties(&cube_props, &cube_pos, 0.2),
    );

    // A second static slab overlapping the ground.
    let wall = colliders.insert(Collider::new(
        slab,
        Isometry::translation(19.5, 0.0, 0.0),
        BodyId(2),
    ));
    let _ = bodies.insert(BodyId(2), RigidBodyProperties::fixed(Point::origin(), 0.8));

    // A ball whose body has no known properties.
    let orphan = colliders.insert(Collider::new(
        Ball::new(0.5).unwrap().into(),
        Isometry::translation(5.0, 1.4, 0.0),
        BodyId(3),
    ));

    let pairs = vec![
        ShapePair::new(ground, cube),
        ShapePair::new(ground, wall),
        ShapePair::new(ground, orphan),
    ];

    Scene {
        colliders,
        bodies,
        ground,
        cube,
        pairs,
    }
}

#[test]
fn resting_cube_gives_one_constraint() {
    let scene = scene();
    let mut narrow_phase = NarrowPhase::new();
    let report = narrow_phase.update(&scene.colliders, &scene.pairs);
    assert_eq!(report.manifolds.len(), 3);

    let (constraints, diagnostics) =
        build_contact_constraints(&report.manifolds, &scene.colliders, &scene.bodies);

    assert_eq!(
        diagnostics,
        ConstraintDiagnostics {
            num_built: 1,
            num_both_static: 1,
            num_invalid_mass_properties: 0,
            num_empty_manifolds: 0,
            num_unknown_handles: 1,
        }
    );
    assert_eq!(diagnostics.num_skipped(), 2);

    let constraint = &constraints[0];
    assert_eq!((constraint.body1, constraint.body2), (BodyId(0), BodyId(1)));
    assert_eq!((constraint.shape1, constraint.shape2), (scene.ground, scene.cube));
    assert_relative_eq!(constraint.friction, 0.4, epsilon = 1.0e-6);
    assert_relative_eq!(constraint.normal, Vector::y(), epsilon = 1.0e-6);
    assert_relative_eq!(constraint.tangents[0], Vector::z(), epsilon = 1.0e-6);
    assert_relative_eq!(constraint.tangents[1], Vector::x(), epsilon = 1.0e-6);
    assert_eq!(constraint.points.len(), 4);

    let cube_props = &scene.bodies[&BodyId(1)];
    let falling = Vector::new(0.0, -1.0, 0.0);
    let sliding = Vector::new(0.0, 0.0, 2.0);

    for pt in &constraint.points {
        assert_relative_eq!(pt.penetration_depth, 0.05, epsilon = 1.0e-5);
        assert_relative_eq!(pt.point1.y, 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(pt.point2.y, 0.95, epsilon = 1.0e-5);
        assert_relative_eq!(pt.point2.x.abs(), 0.5, epsilon = 1.0e-5);
        assert_relative_eq!(pt.point2.z.abs(), 0.5, epsilon = 1.0e-5);

        // The cube moving toward the ground has a negative normal velocity.
        let zero = Vector::zeros();
        let normal_vel = pt
            .normal_row
            .relative_velocity(&zero, &zero, &falling, &zero);
        assert_relative_eq!(normal_vel, -1.0, epsilon = 1.0e-6);

        let tangent_vel = pt.tangent_rows[0].relative_velocity(&zero, &zero, &sliding, &zero);
        assert_relative_eq!(tangent_vel, 2.0, epsilon = 1.0e-6);

        // A spinning cube moves its corners along the tangents, not the normal.
        let spin = Vector::y();
        let spin_vel = pt.normal_row.relative_velocity(&zero, &zero, &zero, &spin);
        assert_relative_eq!(spin_vel, 0.0, epsilon = 1.0e-6);

        let ground_props = &scene.bodies[&BodyId(0)];
        let inv_mass = pt.normal_row.inverse_effective_mass(ground_props, cube_props);
        assert!(inv_mass > cube_props.inv_mass);
    }

    // The tangents do not change from one pass to the next.
    let report = narrow_phase.update(&scene.colliders, &scene.pairs);
    let (again, _) = build_contact_constraints(&report.manifolds, &scene.colliders, &scene.bodies);
    assert_eq!(again, constraints);
}

#[test]
fn removed_colliders_are_skipped() {
    let mut scene = scene();
    let mut narrow_phase = NarrowPhase::new();
    let report = narrow_phase.update(&scene.colliders, &scene.pairs[..1]);
    assert_eq!(report.manifolds.len(), 1);

    assert!(scene.colliders.remove(scene.cube).is_some());
    let (constraints, diagnostics) =
        build_contact_constraints(&report.manifolds, &scene.colliders, &scene.bodies);

    assert!(constraints.is_empty());
    assert_eq!(diagnostics.num_unknown_handles, 1);
    assert_eq!(diagnostics.num_built, 0);
}
