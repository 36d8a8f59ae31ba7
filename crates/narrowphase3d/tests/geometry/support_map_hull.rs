use approx::assert_relative_eq;
use narrowphase3d::math::{Isometry, Point, Real, Vector};
use narrowphase3d::shape::{Ball, Capsule, ConvexPolyhedron, ConvexShape, Cuboid, SupportMap};

fn random_unit(rng: &mut oorandom::Rand32) -> Vector<Real> {
    loop {
        let v = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);
        if let Some(v) = v.try_normalize(1.0e-3) {
            return v;
        }
    }
}

fn wedge(margin: Real) -> ConvexPolyhedron {
    let points = vec![
        Point::new(-1.0, 0.0, -0.5),
        Point::new(1.0, 0.0, -0.5),
        Point::new(0.0, 1.5, -0.5),
        Point::new(-1.0, 0.0, 0.5),
        Point::new(1.0, 0.0, 0.5),
        Point::new(0.0, 1.5, 0.5),
    ];
    let faces: Vec<Vec<u32>> = vec![
        vec![0, 1, 2],
        vec![3, 4, 5],
        vec![0, 1, 4, 3],
        vec![1, 2, 5, 4],
        vec![2, 0, 3, 5],
    ];
    ConvexPolyhedron::from_convex_mesh(points, &faces)
        .unwrap()
        .with_margin(margin)
        .unwrap()
}

/// The exact support value `max(p · dir)` of each shape, margin included.
fn expected_support(shape: &ConvexShape, dir: &Vector<Real>) -> Real {
    match shape {
        ConvexShape::Ball(b) => b.total_radius(),
        ConvexShape::Cuboid(c) => c.half_extents().dot(&dir.abs()) + c.margin(),
        ConvexShape::Capsule(c) => {
            let segment = c.segment();
            segment.a.coords.dot(dir).max(segment.b.coords.dot(dir)) + c.total_radius()
        }
        ConvexShape::ConvexPolyhedron(p) => {
            p.points()
                .iter()
                .map(|pt| pt.coords.dot(dir))
                .fold(-Real::MAX, Real::max)
                + p.margin()
        }
    }
}

fn shapes() -> Vec<ConvexShape> {
    vec![
        Ball::new(0.5).unwrap().with_margin(0.04).unwrap().into(),
        Cuboid::new(Vector::new(0.5, 1.0, 1.5))
            .unwrap()
            .with_margin(0.04)
            .unwrap()
            .into(),
        Capsule::new(Point::new(-1.0, 0.5, 0.0), Point::new(1.0, -0.5, 0.2), 0.3)
            .unwrap()
            .with_margin(0.04)
            .unwrap()
            .into(),
        wedge(0.0).into(),
        wedge(0.04).into(),
    ]
}

#[test]
fn support_points_maximize_the_dot_product() {
    let mut rng = oorandom::Rand32::new(7);

    for shape in shapes() {
        let support_map = shape.as_support_map();

        for _ in 0..500 {
            let dir = random_unit(&mut rng);
            let expected = expected_support(&shape, &dir);

            let support = support_map.local_support_point(&dir);
            assert_relative_eq!(support.coords.dot(&dir), expected, epsilon = 1.0e-5);

            // The support function does not depend on the direction length.
            let scaled = support_map.local_support_point(&(dir * 3.5));
            assert_relative_eq!(scaled, support, epsilon = 1.0e-5);

            let core = support_map.local_support_point_without_margin(&dir);
            assert_relative_eq!(
                core.coords.dot(&dir),
                expected - support_map.margin(),
                epsilon = 1.0e-5
            );
        }
    }
}

#[test]
fn bounds_enclose_the_support_points() {
    let mut rng = oorandom::Rand32::new(11);

    for shape in shapes() {
        let support_map = shape.as_support_map();
        let bounds = shape.local_bounds();

        // The local bounds are tight along each axis.
        for i in 0..3 {
            let axis = Vector::ith(i, 1.0);
            assert_relative_eq!(
                bounds.maxs[i],
                support_map.local_support_point(&axis)[i],
                epsilon = 1.0e-5
            );
            assert_relative_eq!(
                bounds.mins[i],
                support_map.local_support_point(&-axis)[i],
                epsilon = 1.0e-5
            );
        }

        for _ in 0..50 {
            let pos = Isometry::new(random_unit(&mut rng) * 3.0, random_unit(&mut rng));
            let aabb = shape.compute_aabb(&pos).loosened(1.0e-4);

            for _ in 0..20 {
                let dir = random_unit(&mut rng);
                let pt = support_map.support_point(&pos, &dir);
                assert!(aabb.contains_local_point(&pt));
            }
        }
    }
}

#[test]
fn inside_test_is_strict_on_the_core() {
    let ball = ConvexShape::from(Ball::new(1.0).unwrap().with_margin(0.5).unwrap());
    assert!(ball.test_point_inside(&Point::new(0.0, 0.999, 0.0)));
    assert!(!ball.test_point_inside(&Point::new(0.0, 1.0, 0.0)));
    assert!(!ball.test_point_inside(&Point::new(0.0, 1.2, 0.0)));

    let cuboid = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    assert!(cuboid.test_point_inside(&Point::new(0.5, -0.999, 0.9)));
    assert!(!cuboid.test_point_inside(&Point::new(1.0, 0.0, 0.0)));

    let capsule = ConvexShape::from(Capsule::new_z(1.0, 0.5).unwrap());
    assert!(capsule.test_point_inside(&Point::new(0.0, 0.0, 1.49)));
    assert!(!capsule.test_point_inside(&Point::new(0.0, 0.0, 1.5)));
    assert!(!capsule.test_point_inside(&Point::new(0.5, 0.0, 0.0)));

    let wedge = ConvexShape::from(wedge(0.1));
    assert!(wedge.test_point_inside(&Point::new(0.0, 0.5, 0.0)));
    assert!(!wedge.test_point_inside(&Point::new(0.0, 0.0, 0.0)));
    assert!(!wedge.test_point_inside(&Point::new(0.0, -0.05, 0.0)));
}

#[test]
fn mass_properties_include_the_margin() {
    let cuboid = ConvexShape::from(
        Cuboid::new(Vector::new(0.9, 0.4, 0.9))
            .unwrap()
            .with_margin(0.1)
            .unwrap(),
    );
    let props = cuboid.mass_properties(2.0);
    assert_relative_eq!(props.mass(), 8.0, epsilon = 1.0e-4);
    assert_relative_eq!(props.local_com, Point::origin());

    let ball = ConvexShape::from(Ball::new(0.9).unwrap().with_margin(0.1).unwrap());
    let props = ball.mass_properties(1.0);
    let expected_mass = core::f32::consts::PI * 4.0 / 3.0;
    assert_relative_eq!(props.mass(), expected_mass, epsilon = 1.0e-4);
    assert_relative_eq!(
        props.principal_inertia(),
        Vector::repeat(expected_mass * 0.4),
        epsilon = 1.0e-4
    );

    // The inertia tensor for a given mass does not depend on the density.
    let tensor = ball.local_inertia_tensor(expected_mass);
    assert_relative_eq!(
        tensor.diagonal(),
        props.principal_inertia(),
        epsilon = 1.0e-4
    );
}
