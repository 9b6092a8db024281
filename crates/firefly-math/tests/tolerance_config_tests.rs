// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use firefly_math::{rotation, Axis, ConfigError, Mat3, Tolerances};

#[test]
fn round_trips_through_pretty_json() {
    let t = Tolerances {
        orthonormality: 1e-12,
        determinant: 5e-10,
    };
    let bytes = t.to_json_vec().unwrap_or_default();
    assert!(matches!(Tolerances::from_json_slice(&bytes), Ok(back) if back == t));
}

#[test]
fn nan_and_garbage_are_rejected() {
    // JSON has no NaN literal, so it surfaces as a decode error.
    assert!(matches!(
        Tolerances::from_json_str(r#"{ "determinant": NaN }"#),
        Err(ConfigError::Serde(_))
    ));
    assert!(matches!(
        Tolerances::from_json_str("not json"),
        Err(ConfigError::Serde(_))
    ));
    let t = Tolerances {
        orthonormality: f64::INFINITY,
        determinant: 0.0,
    };
    assert!(matches!(
        t.validate(),
        Err(ConfigError::InvalidTolerance { name: "orthonormality", .. })
    ));
}

#[test]
fn default_tolerances_accept_generated_rotations() {
    let t = Tolerances::default();
    for axis in Axis::ALL {
        for angle in [-720.5, -1.0, 0.0, 1e-3, 45.0, 1234.5678] {
            assert!(t.accepts(&rotation(axis, angle)), "axis {axis} angle {angle}");
        }
    }
}

#[test]
fn zero_tolerance_rejects_perturbed_rotation() {
    let strict = Tolerances {
        orthonormality: 0.0,
        determinant: 0.0,
    };
    let mut rows = rotation(Axis::X, 10.0).to_rows();
    rows[1][1] += 1e-6;
    assert!(!strict.accepts(&Mat3::from(rows)));
    assert!(strict.accepts(&Mat3::identity()));
}
