use approx::assert_relative_eq;
use narrowphase3d::math::{Isometry, Point, Real, Vector};
use narrowphase3d::query::{DispatchTable, NarrowPhaseConfig};
use narrowphase3d::shape::{Ball, Capsule, ConvexPolyhedron, ConvexShape, Cuboid, SupportMap};

fn octahedron(radius: Real) -> ConvexPolyhedron {
    let points = vec![
        Point::new(radius, 0.0, 0.0),
        Point::new(-radius, 0.0, 0.0),
        Point::new(0.0, radius, 0.0),
        Point::new(0.0, -radius, 0.0),
        Point::new(0.0, 0.0, radius),
        Point::new(0.0, 0.0, -radius),
    ];
    let faces = [
        [0u32, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];
    ConvexPolyhedron::from_convex_mesh(points, &faces).unwrap()
}

fn random_unit(rng: &mut oorandom::Rand32) -> Vector<Real> {
    loop {
        let v = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);
        if let Some(v) = v.try_normalize(1.0e-3) {
            return v;
        }
    }
}

/// The overlap of both shapes projected on `dir`, margins included.
fn overlap_along(
    shape1: &ConvexShape,
    pos1: &Isometry<Real>,
    shape2: &ConvexShape,
    pos2: &Isometry<Real>,
    dir: &Vector<Real>,
) -> Real {
    shape1.support_point(pos1, dir).coords.dot(dir)
        - shape2.support_point(pos2, &-dir).coords.dot(dir)
}

/// Positions `shape2`, rotated by `rotation`, so that it overlaps `shape1` (at the
/// origin) by exactly `penetration` along the unit vector `dir`.
fn place_along(
    shape1: &ConvexShape,
    shape2: &ConvexShape,
    rotation: &Vector<Real>,
    dir: &Vector<Real>,
    penetration: Real,
) -> Isometry<Real> {
    let rotated = Isometry::new(Vector::zeros(), *rotation);
    let reach = overlap_along(shape1, &Isometry::identity(), shape2, &rotated, dir);
    Isometry::new(dir * (reach - penetration), *rotation)
}

fn assert_symmetric(
    shape1: &ConvexShape,
    pos1: &Isometry<Real>,
    shape2: &ConvexShape,
    pos2: &Isometry<Real>,
) -> Option<(Vector<Real>, Real)> {
    let table = DispatchTable::new();
    let config = NarrowPhaseConfig::default();
    let m12 = table.test(shape1, pos1, shape2, pos2, &config).unwrap();
    let m21 = table.test(shape2, pos2, shape1, pos1, &config).unwrap();

    assert_eq!(m12.is_empty(), m21.is_empty());

    if m12.is_empty() {
        return None;
    }

    assert_relative_eq!(m12.normal, -m21.normal, epsilon = 1.0e-5);
    assert_relative_eq!(
        m12.max_penetration_depth(),
        m21.max_penetration_depth(),
        epsilon = 1.0e-5
    );
    assert!(m12.validate(4) && m21.validate(4));

    Some((m12.normal, m12.max_penetration_depth()))
}

#[test]
fn rotated_box_sinking_into_box() {
    let big = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    let small = ConvexShape::from(Cuboid::new(Vector::repeat(0.5)).unwrap());
    let pos_small = Isometry::new(Vector::new(0.0, 0.0, 1.4), Vector::z() * 0.3);

    let (normal, depth) =
        assert_symmetric(&big, &Isometry::identity(), &small, &pos_small).unwrap();
    assert_relative_eq!(normal, Vector::z(), epsilon = 1.0e-5);
    assert_relative_eq!(depth, 0.1, epsilon = 1.0e-5);
}

#[test]
fn octahedron_tip_in_box() {
    let cuboid = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    let octahedron = ConvexShape::from(octahedron(0.5));
    let pos = Isometry::translation(0.2, -0.1, 1.45);

    let (normal, depth) =
        assert_symmetric(&cuboid, &Isometry::identity(), &octahedron, &pos).unwrap();
    assert_relative_eq!(normal, Vector::z(), epsilon = 1.0e-5);
    assert_relative_eq!(depth, 0.05, epsilon = 1.0e-5);
}

#[test]
fn capsule_and_ball_against_box() {
    let cuboid = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    let capsule = ConvexShape::from(Capsule::new_x(0.5, 0.2).unwrap());
    let ball = ConvexShape::from(Ball::new(0.3).unwrap());

    let pos_capsule = Isometry::translation(0.0, 0.0, 1.18);
    let (_, depth) =
        assert_symmetric(&capsule, &pos_capsule, &cuboid, &Isometry::identity()).unwrap();
    assert_relative_eq!(depth, 0.02, epsilon = 1.0e-5);

    let pos_ball = Isometry::translation(0.0, 1.25, 0.0);
    let (normal, depth) =
        assert_symmetric(&ball, &pos_ball, &cuboid, &Isometry::identity()).unwrap();
    assert_relative_eq!(normal, -Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(depth, 0.05, epsilon = 1.0e-5);
}

#[test]
fn separated_shapes_agree() {
    let cuboid = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    let octahedron = ConvexShape::from(octahedron(0.5));
    let capsule = ConvexShape::from(Capsule::new_y(1.0, 0.25).unwrap());
    let far = Isometry::new(Vector::new(3.5, 3.6, 3.2), Vector::new(0.1, 0.2, 0.3));

    for shape in [&cuboid, &octahedron, &capsule] {
        assert!(assert_symmetric(&cuboid, &Isometry::identity(), shape, &far).is_none());
    }
}

#[test]
fn nearly_tied_faces_pick_the_closest_axis() {
    let cuboid = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    let pos2 = Isometry::new(Vector::new(1.72, 0.3, 0.2), Vector::z() * 0.43);
    let expected = 1.0 + 0.43f32.cos() + 0.43f32.sin() - 1.72;

    let (normal, depth) =
        assert_symmetric(&cuboid, &Isometry::identity(), &cuboid, &pos2).unwrap();
    assert_relative_eq!(normal, Vector::x(), epsilon = 1.0e-5);
    assert_relative_eq!(depth, expected, epsilon = 1.0e-4);

    // Exactly tied faces of two aligned boxes.
    let pos2 = Isometry::translation(1.9, 0.3, -0.2);
    let (normal, depth) =
        assert_symmetric(&cuboid, &Isometry::identity(), &cuboid, &pos2).unwrap();
    assert_relative_eq!(normal, Vector::x(), epsilon = 1.0e-5);
    assert_relative_eq!(depth, 0.1, epsilon = 1.0e-5);
}

#[test]
fn random_polyhedral_pairs_are_order_independent() {
    let cuboid = ConvexShape::from(Cuboid::new(Vector::new(1.0, 0.6, 0.8)).unwrap());
    let small = ConvexShape::from(Cuboid::new(Vector::repeat(0.5)).unwrap());
    let rounded = ConvexShape::from(
        Cuboid::new(Vector::new(0.7, 0.5, 0.6))
            .unwrap()
            .with_margin(0.1)
            .unwrap(),
    );
    let sharp_octahedron = ConvexShape::from(octahedron(0.9));
    let rounded_octahedron = ConvexShape::from(octahedron(0.8).with_margin(0.05).unwrap());

    // Rounded shapes may touch through their margins without a separating core axis,
    // so only sharp pairs must agree with a gap along the placement direction.
    let pairs = [
        (&cuboid, &small, true),
        (&cuboid, &sharp_octahedron, true),
        (&sharp_octahedron, &sharp_octahedron, true),
        (&small, &small, true),
        (&rounded, &rounded_octahedron, false),
        (&small, &rounded, false),
    ];
    let mut rng = oorandom::Rand32::new(2024);

    for (shape1, shape2, sharp) in pairs {
        for _ in 0..150 {
            let dir = random_unit(&mut rng);
            let rotation = random_unit(&mut rng) * rng.rand_float() * core::f32::consts::PI;
            let penetration = rng.rand_float() * 0.3 - 0.1;

            if penetration.abs() < 0.01 {
                continue;
            }

            let pos1 = Isometry::identity();
            let pos2 = place_along(shape1, shape2, &rotation, &dir, penetration);
            let contact = assert_symmetric(shape1, &pos1, shape2, &pos2);

            if penetration > 0.0 {
                assert!(contact.is_some(), "missed overlap of {penetration} along {dir:?}");
            } else if sharp {
                assert!(contact.is_none(), "contact across a gap of {penetration}");
            }

            if let Some((normal, depth)) = contact {
                // Moving the second shape along the normal by the overlap separates
                // them, so the overlap along the normal stays small.
                let overlap = overlap_along(shape1, &pos1, shape2, &pos2, &normal);
                assert!(depth <= overlap + 1.0e-4, "{depth} > {overlap}");
                assert!(overlap < 0.35, "overlap {overlap} along {normal:?}");
            }
        }
    }
}

#[test]
fn random_capsules_around_polyhedra() {
    let cuboid = ConvexShape::from(Cuboid::new(Vector::new(1.0, 0.6, 0.8)).unwrap());
    let sharp_octahedron = ConvexShape::from(octahedron(0.9));
    // A thin capsule, so that its core often crosses the edges of the polyhedra.
    let capsule = ConvexShape::from(Capsule::new_x(0.6, 0.05).unwrap());
    let mut rng = oorandom::Rand32::new(77);
    let mut num_contacts = 0;

    for poly in [&cuboid, &sharp_octahedron] {
        for _ in 0..200 {
            let dir = random_unit(&mut rng);
            let rotation = random_unit(&mut rng) * rng.rand_float() * core::f32::consts::PI;
            let penetration = rng.rand_float() * 0.3 - 0.1;

            let pos1 = Isometry::identity();
            let pos2 = place_along(poly, &capsule, &rotation, &dir, penetration);

            if let Some((normal, depth)) = assert_symmetric(poly, &pos1, &capsule, &pos2) {
                let overlap = overlap_along(poly, &pos1, &capsule, &pos2, &normal);
                assert!(depth <= overlap + 1.0e-4, "{depth} > {overlap}");
                assert!(overlap < 0.6, "overlap {overlap} along {normal:?}");
                num_contacts += 1;
            }
        }
    }

    assert!(num_contacts > 100);
}
