// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Row‑major 3×3 `f64` matrix.
///
/// - Stored as `[[f64; 3]; 3]`, one inner array per row, which is the layout
///   most linear-algebra containers accept for a literal matrix.
/// - Produced by the rotation generator and consumed by callers that chain
///   frame transforms via [`Mat3::multiply`].
///
/// # Examples
/// ```
/// use firefly_math::{Mat3, Vec3};
/// let m = Mat3::identity();
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(m.transform(&v), v);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            rows: [
                [1.0, 0.0, 0.0], // row 0
                [0.0, 1.0, 0.0], // row 1
                [0.0, 0.0, 1.0], // row 2
            ],
        }
    }

    /// Creates a matrix from row-major data.
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the matrix as row-major nested arrays.
    pub const fn to_rows(self) -> [[f64; 3]; 3] {
        self.rows
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not in `0..3`.
    pub const fn at(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Row `idx` as a vector.
    ///
    /// # Panics
    /// Panics if `idx` is not in `0..3`.
    pub const fn row(&self, idx: usize) -> Vec3 {
        let [x, y, z] = self.rows[idx];
        Vec3::new(x, y, z)
    }

    /// Column `idx` as a vector.
    ///
    /// # Panics
    /// Panics if `idx` is not in `0..3`.
    pub const fn column(&self, idx: usize) -> Vec3 {
        Vec3::new(self.rows[0][idx], self.rows[1][idx], self.rows[2][idx])
    }

    /// Builds the skew-symmetric (cross-product) matrix of `v`.
    ///
    /// `Mat3::skew(&a).transform(&b)` equals `a.cross(&b)`.
    ///
    /// ```
    /// use firefly_math::{Mat3, Vec3};
    /// let k = Mat3::skew(&Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(k.to_rows(), [[0.0, -3.0, 2.0], [3.0, 0.0, -1.0], [-2.0, 1.0, 0.0]]);
    /// ```
    pub fn skew(v: &Vec3) -> Self {
        let [x, y, z] = v.to_array();
        Self::new([
            [0.0, -z, y],
            [z, 0.0, -x],
            [-y, x, 0.0],
        ])
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, value) in out_row.iter_mut().enumerate() {
                *value = self.rows[col][row];
            }
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// ```
    /// use firefly_math::{rotation_z, Mat3};
    /// let r = rotation_z(0.0);
    /// assert_eq!(r.multiply(&Mat3::identity()), r);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, value) in out_row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.rows[row][k] * rhs.rows[k][col];
                }
                *value = sum;
            }
        }
        Self::new(out)
    }

    /// Applies the matrix to a column vector (`self * v`).
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Determinant via cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Largest absolute element-wise difference to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        let mut worst: f64 = 0.0;
        for (lhs, rhs) in self.rows.iter().zip(other.rows.iter()) {
            for (a, b) in lhs.iter().zip(rhs.iter()) {
                worst = worst.max((a - b).abs());
            }
        }
        worst
    }

    /// `true` when every element is within `tol` of the matching element of `other`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.max_abs_diff(other) <= tol
    }

    /// `true` when `self * selfᵀ` is the identity within `tol`.
    pub fn is_orthonormal(&self, tol: f64) -> bool {
        self.multiply(&self.transpose()).approx_eq(&Self::identity(), tol)
    }

    /// `true` when the matrix is orthonormal and its determinant is `+1`,
    /// both within `tol`. Reflections (determinant `-1`) are rejected.
    pub fn is_proper_rotation(&self, tol: f64) -> bool {
        self.is_orthonormal(tol) && (self.determinant() - 1.0).abs() <= tol
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f64; 3]; 3]> for Mat3 {
    fn from(value: [[f64; 3]; 3]) -> Self {
        Self { rows: value }
    }
}

impl From<Mat3> for [[f64; 3]; 3] {
    fn from(value: Mat3) -> Self {
        value.rows
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform(&rhs)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Mat3> for nalgebra::Matrix3<f64> {
    fn from(value: Mat3) -> Self {
        let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = value.rows;
        // `Matrix3::new` takes its arguments in row-major order.
        Self::new(m11, m12, m13, m21, m22, m23, m31, m32, m33)
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Matrix3<f64>> for Mat3 {
    fn from(value: nalgebra::Matrix3<f64>) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (row, out_row) in rows.iter_mut().enumerate() {
            for (col, out) in out_row.iter_mut().enumerate() {
                *out = value[(row, col)];
            }
        }
        Self::new(rows)
    }
}
