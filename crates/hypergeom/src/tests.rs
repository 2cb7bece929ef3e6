use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn arb_component() -> impl Strategy<Value = Float> {
    -1000.0..1000.0
}

fn arb_vector(ndim: usize) -> impl Strategy<Value = Vector> {
    prop::collection::vec(arb_component(), ndim).prop_map(Vector::from)
}

fn arb_vector_pair() -> impl Strategy<Value = (Vector, Vector)> {
    (1_usize..8).prop_flat_map(|ndim| (arb_vector(ndim), arb_vector(ndim)))
}

fn arb_hyperplane() -> impl Strategy<Value = Hyperplane> {
    (1_usize..8)
        .prop_flat_map(|ndim| (arb_vector(ndim), arb_component()))
        .prop_filter("weights must be nonzero", |(w, _)| w.mag2() > 0.0)
        .prop_map(|(w, c)| Hyperplane::new(w, c).expect("nonempty weights"))
}

proptest! {
    #[test]
    fn proptest_add_sub_round_trip((a, b) in arb_vector_pair()) {
        let round_trip = a.checked_add(&b).unwrap().checked_sub(&b).unwrap();
        prop_assert!(approx::abs_diff_eq!(round_trip, a, epsilon = 1e-9));
    }

    #[test]
    fn proptest_unit_vector_magnitude(v in (1_usize..8).prop_flat_map(arb_vector)) {
        prop_assume!(v.mag2() > 0.0);
        let unit = v.unit_vector().unwrap();
        prop_assert!((unit.magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn proptest_perpendicular_symmetric((a, b) in arb_vector_pair()) {
        prop_assert_eq!(a.is_perpendicular_to(&b), b.is_perpendicular_to(&a));
    }

    #[test]
    fn proptest_projection_plus_rejection((a, b) in arb_vector_pair()) {
        prop_assume!(b.mag2() > 0.0);
        let (projection, _ratio) = a.projection_onto(&b).unwrap();
        let rejection = a.rejection_from(&b).unwrap();
        let sum = projection.checked_add(&rejection).unwrap();
        prop_assert!(approx::abs_diff_eq!(sum, a, epsilon = 1e-6));
    }

    #[test]
    fn proptest_origin_halfspace_matches_offset(p in arb_hyperplane()) {
        let origin = Vector::zero(p.ndim());
        prop_assert_eq!(p.check_halfspace(&origin), Ok(Sign::of(p.offset())));
    }

    #[test]
    fn proptest_parallel_reflexive(p in arb_hyperplane()) {
        prop_assert_eq!(p.is_parallel_to(&p), Ok(true));
        prop_assert_eq!(p.distance_from_hyperplane(&p), Ok(PlaneDistance::Parallel(0.0)));
    }

    #[test]
    fn proptest_scaled_plane_is_parallel(p in arb_hyperplane(), scale in 0.5..4.0, shift in -10.0..10.0) {
        let q = Hyperplane::new(p.weights() * scale, p.offset() + shift).unwrap();
        prop_assert_eq!(p.is_parallel_to(&q), Ok(true));
        prop_assert_eq!(q.is_parallel_to(&p), Ok(true));
        // `q` is equivalent to `w·x + (c + shift) / scale = 0`
        let expected = (p.offset() - q.offset() / scale).abs() / p.weights().magnitude();
        let distance = p.distance_from_hyperplane(&q).unwrap().distance().unwrap();
        prop_assert!((distance - expected).abs() <= 1e-6 * expected.max(1.0));
    }

    #[test]
    fn proptest_parallelism_ignores_scale(p in arb_hyperplane(), exp in -9_i32..9, negate in any::<bool>()) {
        let scale = Float::powi(10.0, exp) * if negate { -1.0 } else { 1.0 };
        let q = Hyperplane::new(p.weights() * scale, 1.0).unwrap();
        prop_assert_eq!(p.is_parallel_to(&q), Ok(true));

        // Perturb one axis relative to its own size.
        let mut weights = q.weights().clone();
        let axis = weights.iter().position(|w| w != 0.0).unwrap();
        weights.0[axis] *= 1.001;
        if p.ndim() > 1 && weights.iter().filter(|&w| w != 0.0).count() > 1 {
            let r = Hyperplane::new(weights, 1.0).unwrap();
            prop_assert_eq!(p.is_parallel_to(&r), Ok(false));
        }
    }

    #[test]
    fn proptest_point_distance_dimension_mismatch(p in arb_hyperplane(), extra in 1_usize..3) {
        let point = Vector::zero(p.ndim() + extra);
        prop_assert_eq!(
            p.distance_from_point(&point),
            Err(GeometryError::DimensionMismatch { expected: p.ndim(), found: p.ndim() + extra }),
        );
    }
}

#[test]
fn test_scenario_parallel_distance() {
    let p1 = Hyperplane::new(vector![4.0, 5.0], -13.0).unwrap();
    let p2 = Hyperplane::new(vector![2.0, 2.5], -18.0).unwrap();
    assert_eq!(p1.is_parallel_to(&p2), Ok(true));
    assert_approx_eq!(p1.distance_from_origin().unwrap(), -13.0 / 41.0_f64.sqrt());
    assert_approx_eq!(p2.distance_from_origin().unwrap(), -18.0 / 10.25_f64.sqrt());
    let d = p1.distance_from_hyperplane(&p2).unwrap();
    assert!((d.distance().unwrap() - 3.592).abs() < 0.001);
}

#[test]
fn test_scenario_vectors() {
    assert_eq!(vector![3.0, 4.0].magnitude(), 5.0);
    assert_eq!(
        vector![1.0, 0.0].is_perpendicular_to(&vector![0.0, 1.0]),
        Ok(true),
    );
    assert_eq!(
        vector![1.0, 0.0].is_perpendicular_to(&vector![1.0, 0.0]),
        Ok(false),
    );
}

#[test]
fn test_scenario_parallel() {
    let p = Hyperplane::through_origin(vector![1.0, 1.0]).unwrap();
    let q = Hyperplane::new(vector![2.0, 2.0], -5.0).unwrap();
    assert_eq!(p.is_parallel_to(&q), Ok(true));

    let p = Hyperplane::through_origin(vector![1.0, 2.0]).unwrap();
    let q = Hyperplane::through_origin(vector![2.0, 1.0]).unwrap();
    assert_eq!(p.is_parallel_to(&q), Ok(false));
}

#[test]
fn test_linear_classifier_plot() {
    let boundary = Hyperplane::new(vector![4.0, 5.0], -13.0).unwrap();
    let mut canvas = RecordingCanvas::default();
    boundary.plot_2d(&mut canvas, DEFAULT_PLOT_RANGE).unwrap();
    vector![1.0, 1.0]
        .plot_2d(&mut canvas, None, None, &Color::new("blue"))
        .unwrap();

    let DrawCommand::Line { points } = &canvas.commands[0] else {
        panic!("expected line, got {:?}", canvas.commands[0]);
    };
    assert_eq!(points.len(), 11);
    for &[x, y] in points {
        let point = vector![x, y];
        assert_approx_eq!(boundary.distance_from_point(&point).unwrap(), 0.0);
    }
    assert_eq!(canvas.commands.len(), 5);
    assert_eq!(canvas.commands[4], DrawCommand::Legend);
}
