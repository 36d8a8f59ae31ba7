use approx::assert_relative_eq;
use narrowphase3d::math::{Isometry, Point, Real, Vector};
use narrowphase3d::query::{Ray, RayCast};
use narrowphase3d::shape::{Ball, Capsule, ConvexPolyhedron, ConvexShape, Cuboid, FeatureId};

fn octahedron(margin: Real) -> ConvexShape {
    let points = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
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
    ConvexPolyhedron::from_convex_mesh(points, &faces)
        .unwrap()
        .with_margin(margin)
        .unwrap()
        .into()
}

fn shapes() -> Vec<ConvexShape> {
    vec![
        Ball::new(1.0).unwrap().with_margin(0.2).unwrap().into(),
        Cuboid::new(Vector::new(1.0, 0.5, 0.7))
            .unwrap()
            .with_margin(0.1)
            .unwrap()
            .into(),
        Capsule::new_y(1.0, 0.5).unwrap().with_margin(0.05).unwrap().into(),
        octahedron(0.0),
        octahedron(0.2),
    ]
}

fn random_unit(rng: &mut oorandom::Rand32) -> Vector<Real> {
    loop {
        let v = Vector::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );
        if let Some(v) = v.try_normalize(1.0e-3) {
            return v;
        }
    }
}

#[test]
fn rays_hit_the_margined_surface() {
    let ball = &shapes()[0];
    let pos = Isometry::translation(5.0, 0.0, 0.0);
    let ray = Ray::new(Point::origin(), Vector::x());

    let hit = ball.cast_ray_and_get_normal(&pos, &ray, 100.0, true).unwrap();
    assert_relative_eq!(hit.time_of_impact, 3.8, epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, -Vector::x(), epsilon = 1.0e-6);
    assert!(ball.cast_ray(&pos, &ray, 3.0, true).is_none());

    let cuboid = &shapes()[1];
    let pos = Isometry::new(
        Vector::new(0.0, 5.0, 0.0),
        Vector::z() * core::f32::consts::FRAC_PI_2,
    );
    let ray = Ray::new(Point::origin(), Vector::y());
    let hit = cuboid.cast_ray_and_get_normal(&pos, &ray, 100.0, true).unwrap();
    // The local x axis is aligned with the world y axis.
    assert_relative_eq!(hit.time_of_impact, 3.9, epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, -Vector::y(), epsilon = 1.0e-5);
    assert_eq!(hit.feature, FeatureId::Face(3));

    let capsule = &shapes()[2];
    let down = Ray::new(Point::new(0.0, 10.0, 0.0), -Vector::y());
    let hit = capsule.cast_local_ray_and_get_normal(&down, 100.0, true).unwrap();
    assert_relative_eq!(hit.time_of_impact, 8.45, epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, Vector::y(), epsilon = 1.0e-6);
    let side = Ray::new(Point::new(5.0, 0.3, 0.0), -Vector::x());
    let hit = capsule.cast_local_ray_and_get_normal(&side, 100.0, true).unwrap();
    assert_relative_eq!(hit.time_of_impact, 4.45, epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, Vector::x(), epsilon = 1.0e-6);

    // Through the center of a face of the octahedron.
    let diagonal = Ray::new(Point::new(2.0, 2.0, 2.0), -Vector::repeat(1.0));
    let hit = shapes()[3]
        .cast_local_ray_and_get_normal(&diagonal, 100.0, true)
        .unwrap();
    assert_relative_eq!(hit.time_of_impact, 5.0 / 3.0, epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, Vector::repeat(1.0).normalize(), epsilon = 1.0e-5);
}

#[test]
fn solid_and_hollow_casts_from_inside() {
    for shape in shapes() {
        let ray = Ray::new(Point::origin(), Vector::z());
        assert_eq!(shape.cast_local_ray(&ray, 100.0, true), Some(0.0));

        // The normal of a hollow hit points toward the inside of the shape.
        let exit = shape.cast_local_ray_and_get_normal(&ray, 100.0, false).unwrap();
        let outward = -exit.normal;
        let boundary = shape.as_support_map().local_support_point(&outward);
        assert!(outward.z > 0.0);
        assert_relative_eq!(
            ray.point_at(exit.time_of_impact).coords.dot(&outward),
            boundary.coords.dot(&outward),
            epsilon = 1.0e-4
        );

        // A ray with no direction only hits a solid shape it starts in.
        let still = Ray::new(Point::origin(), Vector::zeros());
        assert_eq!(shape.cast_local_ray(&still, 100.0, true), Some(0.0));
        assert_eq!(shape.cast_local_ray(&still, 100.0, false), None);
        let outside = Ray::new(Point::new(10.0, 0.0, 0.0), Vector::zeros());
        assert_eq!(shape.cast_local_ray(&outside, 100.0, true), None);
    }
}

#[test]
fn hit_points_lie_on_the_supporting_plane() {
    let mut rng = oorandom::Rand32::new(42);

    for shape in shapes() {
        let support_map = shape.as_support_map();
        let mut num_hits = 0;

        for _ in 0..200 {
            let pos = Isometry::new(random_unit(&mut rng), random_unit(&mut rng));
            let target = pos * Point::from(random_unit(&mut rng) * 0.5);
            let origin = target + random_unit(&mut rng) * 10.0;
            let ray = Ray::new(origin, target - origin);

            let Some(hit) = shape.cast_ray_and_get_normal(&pos, &ray, 1.0, true) else {
                continue;
            };
            num_hits += 1;

            let point = ray.point_at(hit.time_of_impact);
            let support = support_map.support_point(&pos, &hit.normal);
            assert_relative_eq!(hit.normal.norm(), 1.0, epsilon = 1.0e-4);
            assert_relative_eq!(
                point.coords.dot(&hit.normal),
                support.coords.dot(&hit.normal),
                epsilon = 1.0e-3
            );
            assert!(hit.normal.dot(&ray.dir) <= 0.0);
        }

        // Every target lies inside of the shape.
        assert_eq!(num_hits, 200);
    }
}
