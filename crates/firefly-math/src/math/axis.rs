// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::math::{Mat3, Vec3};

/// Principal axis selector for elemental rotations.
///
/// The axis fixes which row and column of the rotation matrix stay equal to
/// the identity; the other two are mixed by `cos`/`sin` of the angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// First basis axis (row/column 0).
    X,
    /// Second basis axis (row/column 1).
    Y,
    /// Third basis axis (row/column 2).
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Row/column index left untouched by a rotation about this axis.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Unit basis vector along this axis.
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::UNIT_X,
            Self::Y => Vec3::UNIT_Y,
            Self::Z => Vec3::UNIT_Z,
        }
    }

    /// Elemental rotation about this axis; see [`crate::rotation::rotation`].
    pub fn rotation(self, angle: f64) -> Mat3 {
        crate::rotation::rotation(self, angle)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}
