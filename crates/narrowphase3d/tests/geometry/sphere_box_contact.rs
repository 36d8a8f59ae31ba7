use approx::assert_relative_eq;
use narrowphase3d::math::{Isometry, Point, Real, Vector};
use narrowphase3d::query::{ContactManifoldInfo, DispatchTable, NarrowPhaseConfig};
use narrowphase3d::shape::{Ball, ConvexShape, Cuboid};

const RADIUS: Real = 0.5;

fn collide(ball_center: Point<Real>) -> ContactManifoldInfo {
    let ball = ConvexShape::from(Ball::new(RADIUS).unwrap());
    let cuboid = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());

    DispatchTable::new()
        .test(
            &ball,
            &Isometry::translation(ball_center.x, ball_center.y, ball_center.z),
            &cuboid,
            &Isometry::identity(),
            &NarrowPhaseConfig::default(),
        )
        .unwrap()
}

#[test]
fn sphere_slightly_penetrating_each_face() {
    let eps = 1.0e-3;

    for axis in 0..3 {
        for sign in [-1.0, 1.0] {
            let mut center = Point::origin();
            center[axis] = sign * (1.0 + RADIUS - eps);
            let manifold = collide(center);

            assert_eq!(manifold.len(), 1);
            assert_relative_eq!(manifold.points[0].penetration_depth, eps, epsilon = 1.0e-5);

            let mut expected_normal = Vector::zeros();
            expected_normal[axis] = -sign;
            assert_relative_eq!(manifold.normal, expected_normal, epsilon = 1.0e-6);
        }
    }
}

#[test]
fn sphere_slightly_separated_or_touching() {
    let eps = 1.0e-3;
    assert!(collide(Point::new(0.0, 1.0 + RADIUS + eps, 0.0)).is_empty());
    assert!(collide(Point::new(0.0, 1.0 + RADIUS, 0.0)).is_empty());
}

#[test]
fn sphere_near_an_edge() {
    let offset = 1.0 + 0.3;
    let manifold = collide(Point::new(offset, 0.0, offset));
    let expected_depth = RADIUS - 0.3 * Real::sqrt(2.0);

    assert_eq!(manifold.len(), 1);
    assert_relative_eq!(
        manifold.points[0].penetration_depth,
        expected_depth,
        epsilon = 1.0e-5
    );
    assert_relative_eq!(
        manifold.normal,
        -Vector::new(1.0, 0.0, 1.0).normalize(),
        epsilon = 1.0e-5
    );
    // The contact on the box is on its edge.
    assert_relative_eq!(
        manifold.world_point2(0).unwrap(),
        Point::new(1.0, 0.0, 1.0),
        epsilon = 1.0e-5
    );

    // Out of reach of the edge, even if within reach of both face planes.
    assert!(collide(Point::new(1.4, 0.0, 1.4)).is_empty());
}

#[test]
fn sphere_center_inside_the_box() {
    let manifold = collide(Point::new(0.0, 0.0, 0.8));

    assert_eq!(manifold.len(), 1);
    assert_relative_eq!(manifold.normal, -Vector::z(), epsilon = 1.0e-6);
    assert_relative_eq!(manifold.points[0].penetration_depth, 0.7, epsilon = 1.0e-5);
}
