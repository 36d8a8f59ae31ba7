use approx::assert_relative_eq;
use narrowphase3d::math::{Isometry, Real, Vector};
use narrowphase3d::query::{ContactManifoldInfo, DispatchTable, NarrowPhaseConfig};
use narrowphase3d::shape::{ConvexShape, Cuboid};

fn random_vector(rng: &mut oorandom::Rand32, amplitude: Real) -> Vector<Real> {
    Vector::from_fn(|_, _| (rng.rand_float() * 2.0 - 1.0) * amplitude)
}

fn collide(upper: &ConvexShape, pos2: &Isometry<Real>) -> ContactManifoldInfo {
    let ground = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    DispatchTable::new()
        .test(
            &ground,
            &Isometry::identity(),
            upper,
            pos2,
            &NarrowPhaseConfig::default(),
        )
        .unwrap()
}

fn check_dominant_point_is_stable(upper: &ConvexShape, pos2: Isometry<Real>) {
    let mut rng = oorandom::Rand32::new(42);
    let reference = collide(upper, &pos2);
    let dominant = reference.deepest_point().unwrap();

    for _ in 0..100 {
        let translation = random_vector(&mut rng, 1.0e-6);
        let rotation = random_vector(&mut rng, 1.0e-6);
        let perturbation = Isometry::new(translation, rotation);
        let manifold = collide(upper, &(perturbation * pos2));

        assert_eq!(manifold.len(), reference.len());
        let pt = manifold.deepest_point().unwrap();
        assert_relative_eq!(pt.local_p1, dominant.local_p1, epsilon = 1.0e-4);
        assert_eq!(pt.fid1, dominant.fid1);
    }
}

#[test]
fn sinking_box_dominant_point_is_stable() {
    let small = ConvexShape::from(Cuboid::new(Vector::repeat(0.5)).unwrap());
    let pos2 = Isometry::translation(0.1, 0.2, 1.45);

    assert_eq!(collide(&small, &pos2).len(), 4);
    check_dominant_point_is_stable(&small, pos2);
}

#[test]
fn reduced_octagon_dominant_point_is_stable() {
    // A box rotated by 45 degrees over a box of the same size touches it on an octagon.
    let cuboid = ConvexShape::from(Cuboid::new(Vector::repeat(1.0)).unwrap());
    let pos2 = Isometry::new(
        Vector::new(0.0, 0.0, 1.95),
        Vector::z() * core::f32::consts::FRAC_PI_4,
    );

    let manifold = collide(&cuboid, &pos2);
    assert_eq!(manifold.len(), 4);
    assert_relative_eq!(manifold.max_penetration_depth(), 0.05, epsilon = 1.0e-5);
    check_dominant_point_is_stable(&cuboid, pos2);
}
