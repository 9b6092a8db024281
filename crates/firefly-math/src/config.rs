// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tolerances used when checking that a matrix is a proper rotation.
//!
//! Stored as JSON alongside the rest of the simulation settings. Missing
//! fields fall back to [`DEFAULT_TOLERANCE`], so `{}` is a valid file.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::math::Mat3;

/// Default absolute tolerance for rotation checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Absolute tolerances for orthonormality and determinant checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tolerances {
    /// Maximum element-wise deviation of `M · Mᵀ` from the identity.
    pub orthonormality: f64,
    /// Maximum deviation of `det(M)` from `+1`.
    pub determinant: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            orthonormality: DEFAULT_TOLERANCE,
            determinant: DEFAULT_TOLERANCE,
        }
    }
}

impl Tolerances {
    /// Decodes and validates tolerances from a JSON blob.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let tolerances: Self = serde_json::from_slice(bytes)?;
        tolerances.validate()?;
        debug!(
            orthonormality = tolerances.orthonormality,
            determinant = tolerances.determinant,
            "loaded rotation tolerances"
        );
        Ok(tolerances)
    }

    /// Decodes and validates tolerances from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Self::from_json_slice(text.as_bytes())
    }

    /// Serializes the tolerances as pretty-printed JSON.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Rejects negative, NaN and infinite tolerances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("orthonormality", self.orthonormality),
            ("determinant", self.determinant),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }

    /// `true` when `m` is orthonormal with determinant `+1` under these tolerances.
    pub fn accepts(&self, m: &Mat3) -> bool {
        m.is_orthonormal(self.orthonormality) && (m.determinant() - 1.0).abs() <= self.determinant
    }
}
