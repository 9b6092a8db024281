// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Elemental rotation matrices about the principal axes.
//!
//! Convention: passive (frame) rotations, right-handed, row-major. For an
//! angle producing `c = cos`, `s = sin`:
//!
//! ```text
//! Rx = | 1  0  0 |   Ry = | c  0 -s |   Rz = |  c  s  0 |
//!      | 0  c  s |        | 0  1  0 |        | -s  c  0 |
//!      | 0 -s  c |        | s  0  c |        |  0  0  1 |
//! ```
//!
//! The caller's angle is multiplied by [`ANGLE_SCALE`] before `sin`/`cos` are
//! evaluated. `45.0` therefore yields `c = -0.59181273`, `s = 0.80607549`,
//! which reproduces the reference matrices for that angle. Angles whose scaled
//! argument would overflow are first reduced modulo [`ANGLE_PERIOD`].
//!
//! Every function here is pure: no allocation, no shared state, safe to call
//! from any thread.

use core::f64::consts::{PI, TAU};

use serde_json::Value;
use tracing::debug;

use crate::error::{RotationError, ValueKind};
use crate::math::{canonicalize_zero, Axis, Mat3};

/// Factor applied to the caller's angle to obtain the argument of `sin`/`cos`.
///
/// Fixed at `180/π`. The generator is periodic in its input with period
/// `2π / ANGLE_SCALE` (`π²/90`).
pub const ANGLE_SCALE: f64 = 180.0 / PI;

/// Input period of the generator, `2π / ANGLE_SCALE`.
pub const ANGLE_PERIOD: f64 = TAU / ANGLE_SCALE;

/// Rotation about the X axis.
///
/// ```
/// use firefly_math::{rotation_x, Mat3};
/// assert_eq!(rotation_x(0.0), Mat3::identity());
/// ```
pub fn rotation_x(angle: f64) -> Mat3 {
    elemental(Axis::X, angle)
}

/// Rotation about the Y axis.
pub fn rotation_y(angle: f64) -> Mat3 {
    elemental(Axis::Y, angle)
}

/// Rotation about the Z axis.
pub fn rotation_z(angle: f64) -> Mat3 {
    elemental(Axis::Z, angle)
}

/// Rotation about `axis`; same result as the matching `rotation_{x,y,z}`.
pub fn rotation(axis: Axis, angle: f64) -> Mat3 {
    elemental(axis, angle)
}

/// Checked rotation for angles that arrive untyped (decoded JSON, scripting
/// bridges, fixture files).
///
/// Only a floating-point number is accepted. An integer such as `1` is a
/// parameter-type violation even though `1.0` would be fine; strings and
/// other shapes are rejected the same way. The check runs before any
/// trigonometry.
///
/// ```
/// use firefly_math::{try_rotation, Axis, RotationError, ValueKind};
/// use serde_json::json;
///
/// assert!(try_rotation(Axis::Y, &json!(1.0)).is_ok());
/// assert_eq!(
///     try_rotation(Axis::Y, &json!(1)),
///     Err(RotationError::ParameterTypeViolation { found: ValueKind::Integer })
/// );
/// ```
pub fn try_rotation(axis: Axis, angle: &Value) -> Result<Mat3, RotationError> {
    let angle = strict_float(angle)?;
    Ok(elemental(axis, angle))
}

/// Checked [`rotation_x`]; see [`try_rotation`].
pub fn try_rotation_x(angle: &Value) -> Result<Mat3, RotationError> {
    try_rotation(Axis::X, angle)
}

/// Checked [`rotation_y`]; see [`try_rotation`].
pub fn try_rotation_y(angle: &Value) -> Result<Mat3, RotationError> {
    try_rotation(Axis::Y, angle)
}

/// Checked [`rotation_z`]; see [`try_rotation`].
pub fn try_rotation_z(angle: &Value) -> Result<Mat3, RotationError> {
    try_rotation(Axis::Z, angle)
}

fn strict_float(value: &Value) -> Result<f64, RotationError> {
    if let Value::Number(number) = value {
        if number.is_f64() {
            if let Some(angle) = number.as_f64() {
                return Ok(angle);
            }
        }
    }
    let found = ValueKind::of(value);
    debug!(%found, "rejected non-float rotation angle");
    Err(RotationError::ParameterTypeViolation { found })
}

/// Trig argument for `angle`. Finite angles above roughly `3.1e306` would
/// overflow once scaled, so they are reduced first; `fmod` is exact.
fn scaled_argument(angle: f64) -> f64 {
    let arg = angle * ANGLE_SCALE;
    if arg.is_finite() || !angle.is_finite() {
        return arg;
    }
    libm::fmod(angle, ANGLE_PERIOD) * ANGLE_SCALE
}

fn elemental(axis: Axis, angle: f64) -> Mat3 {
    let (s, c) = libm::sincos(scaled_argument(angle));
    let s = canonicalize_zero(s);
    let c = canonicalize_zero(c);
    let n = canonicalize_zero(-s);
    match axis {
        Axis::X => Mat3::new([
            [1.0, 0.0, 0.0],
            [0.0, c, s],
            [0.0, n, c],
        ]),
        Axis::Y => Mat3::new([
            [c, 0.0, n],
            [0.0, 1.0, 0.0],
            [s, 0.0, c],
        ]),
        Axis::Z => Mat3::new([
            [c, s, 0.0],
            [n, c, 0.0],
            [0.0, 0.0, 1.0],
        ]),
    }
}
