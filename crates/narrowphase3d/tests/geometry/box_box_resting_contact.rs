use approx::assert_relative_eq;
use narrowphase3d::math::{Isometry, Vector};
use narrowphase3d::query::{DispatchTable, NarrowPhaseConfig};
use narrowphase3d::shape::{ConvexShape, Cuboid};

/*
 * Sets up a situation like this:
 * ```raw
 * +---+
 * | 2 |
 * +---+   <- z = 1
 * | 1 |
 * +---+
 * ```
 * with both boxes exactly touching.
 */
#[test]
fn box_resting_on_static_box() {
    let cuboid = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.0, 0.0, 2.0);

    let manifold = DispatchTable::new()
        .test(&cuboid, &pos1, &cuboid, &pos2, &NarrowPhaseConfig::default())
        .unwrap();

    assert_eq!(manifold.len(), 4);
    assert_relative_eq!(manifold.normal, Vector::z(), epsilon = 1.0e-6);
    assert!(manifold.validate(4));

    for i in 0..manifold.len() {
        let pt1 = manifold.world_point1(i).unwrap();
        let pt2 = manifold.world_point2(i).unwrap();

        assert_eq!(manifold.points[i].penetration_depth, 0.0);
        assert_relative_eq!(pt1.z, 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(pt1, pt2, epsilon = 1.0e-6);
        // Each point is a corner of the shared face.
        assert_relative_eq!(pt1.x.abs(), 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(pt1.y.abs(), 1.0, epsilon = 1.0e-6);
    }
}

#[test]
fn box_slightly_above_static_box() {
    let cuboid = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    let pos2 = Isometry::translation(0.0, 0.0, 2.001);

    let manifold = DispatchTable::new()
        .test(
            &cuboid,
            &Isometry::identity(),
            &cuboid,
            &pos2,
            &NarrowPhaseConfig::default(),
        )
        .unwrap();

    assert!(manifold.is_empty());
}

#[test]
fn box_resting_with_margins() {
    let cuboid = Cuboid::new(Vector::repeat(0.9))
        .unwrap()
        .with_margin(0.1)
        .unwrap();
    let shape = ConvexShape::from(cuboid);
    let pos2 = Isometry::translation(0.0, 0.0, 1.95);

    let manifold = DispatchTable::new()
        .test(
            &shape,
            &Isometry::identity(),
            &shape,
            &pos2,
            &NarrowPhaseConfig::default(),
        )
        .unwrap();

    assert_eq!(manifold.len(), 4);
    assert_relative_eq!(manifold.max_penetration_depth(), 0.05, epsilon = 1.0e-5);
    // The contact points lie on the margined surfaces.
    assert_relative_eq!(manifold.world_point1(0).unwrap().z, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(manifold.world_point2(0).unwrap().z, 0.95, epsilon = 1.0e-5);
}
