// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Math primitives for Firefly attitude and frame transformations.

This crate provides:
- Elemental rotation matrices about X, Y and Z (`rotation_x`, `rotation_y`,
  `rotation_z`, `rotation`).
- A checked entry point for untyped angle values (`try_rotation`) that rejects
  integral inputs with `RotationError::ParameterTypeViolation`.
- The 3×3 matrix and 3-vector values they produce (`Mat3`, `Vec3`, `Axis`).
- Tolerances for orthonormality checks, loadable from JSON (`Tolerances`).

Design notes:
- Pure: every call builds a fresh `Copy` value; nothing is cached or shared.
- Row-major `f64` storage so results drop into other linear-algebra code.
- Trigonometry goes through `libm` so identical inputs give identical bits
  across targets.
"]

/// Tolerance configuration for rotation checks.
pub mod config;
/// Error types for the rotation boundary and configuration.
pub mod error;
/// Matrix, vector and axis value types.
pub mod math;
/// Elemental rotation generator.
pub mod rotation;

pub use config::Tolerances;
pub use error::{ConfigError, RotationError, ValueKind};
pub use math::{Axis, Mat3, Vec3};
pub use rotation::{
    rotation, rotation_x, rotation_y, rotation_z, try_rotation, try_rotation_x, try_rotation_y,
    try_rotation_z, ANGLE_PERIOD, ANGLE_SCALE,
};
