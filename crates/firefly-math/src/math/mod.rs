// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Value types shared by the rotation generator: principal axes, 3-vectors
//! and row-major 3×3 matrices.
//!
//! All arithmetic is `f64` without fused multiply-add so products and
//! determinants round identically on every target.

mod axis;
mod mat3;
mod vec3;

pub use axis::Axis;
pub use mat3::Mat3;
pub use vec3::Vec3;

/// Canonicalizes signed zero (`-0.0`) to `+0.0` without affecting non-zero values.
#[inline]
pub(crate) fn canonicalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
