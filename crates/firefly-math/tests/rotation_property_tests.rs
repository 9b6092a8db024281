// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use firefly_math::{rotation, Axis, Mat3, ANGLE_PERIOD, ANGLE_SCALE};
use proptest::prelude::*;

const TOL: f64 = 1e-9;

fn any_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

fn any_finite() -> impl Strategy<Value = f64> {
    use prop::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO
}

proptest! {
    #[test]
    fn times_transpose_is_identity(axis in any_axis(), angle in any_finite()) {
        let m = rotation(axis, angle);
        let diff = m.multiply(&m.transpose()).max_abs_diff(&Mat3::identity());
        prop_assert!(diff <= TOL, "axis {} angle {} diff {}", axis, angle, diff);
    }

    #[test]
    fn determinant_is_one(axis in any_axis(), angle in any_finite()) {
        let det = rotation(axis, angle).determinant();
        prop_assert!((det - 1.0).abs() <= TOL, "axis {} angle {} det {}", axis, angle, det);
    }

    #[test]
    fn periodic_in_scaled_argument(axis in any_axis(), angle in -100.0f64..100.0) {
        let a = rotation(axis, angle);
        let b = rotation(axis, angle + ANGLE_PERIOD);
        prop_assert!(a.approx_eq(&b, TOL), "{:?} vs {:?}", a.to_rows(), b.to_rows());
    }

    #[test]
    fn opposite_angles_are_transposes(axis in any_axis(), angle in -1.0e3f64..1.0e3) {
        let fwd = rotation(axis, angle);
        let back = rotation(axis, -angle);
        prop_assert!(fwd.transpose().approx_eq(&back, TOL));
    }

    #[test]
    fn same_angle_is_bit_identical(axis in any_axis(), angle in any::<f64>()) {
        let a = rotation(axis, angle).to_rows();
        let b = rotation(axis, angle).to_rows();
        for (x, y) in a.iter().flatten().zip(b.iter().flatten()) {
            prop_assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}

#[test]
fn composition_about_one_axis_adds_angles() {
    for axis in Axis::ALL {
        let composed = rotation(axis, 0.3).multiply(&rotation(axis, 0.45));
        assert!(composed.approx_eq(&rotation(axis, 0.75), TOL), "axis {axis}");
    }
}

#[test]
fn quarter_turn_permutes_basis() {
    // With the 180/π scale a quarter turn is π/2 / ANGLE_SCALE input units.
    let quarter = core::f64::consts::FRAC_PI_2 / ANGLE_SCALE;
    let m = rotation(Axis::Z, quarter);
    let want = Mat3::new([[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    assert!(m.approx_eq(&want, 1e-12), "{:?}", m.to_rows());
}

#[test]
fn extreme_finite_angles_still_rotate() {
    let angles = [1e306, 4e306, -4e306, f64::MAX / 2.0, f64::MAX, f64::MIN, f64::MIN_POSITIVE];
    for axis in Axis::ALL {
        for angle in angles {
            let m = rotation(axis, angle);
            assert!(m.is_proper_rotation(TOL), "axis {axis} angle {angle}: {:?}", m.to_rows());
            assert_eq!(m.row(axis.index()), axis.unit());
        }
    }
}
