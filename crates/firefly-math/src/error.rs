// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for the rotation boundary and tolerance configuration.

use core::fmt;

use serde_json::Value;
use thiserror::Error;

/// Shape of a rejected angle value, reported by
/// [`RotationError::ParameterTypeViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A number without a fractional representation (e.g. JSON `1`).
    Integer,
    /// A JSON string.
    String,
    /// A JSON boolean.
    Bool,
    /// JSON `null`.
    Null,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl ValueKind {
    /// Classifies a non-float JSON value.
    ///
    /// Floats never reach this function; a `Number` is classified as
    /// [`ValueKind::Integer`].
    pub(crate) fn of(value: &Value) -> Self {
        match value {
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// Error returned by the checked rotation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotationError {
    /// The angle was not a floating-point value.
    #[error("angle must be a floating-point number of degrees, got {found}")]
    ParameterTypeViolation {
        /// What was supplied instead.
        found: ValueKind,
    },
}

/// Error type for tolerance configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A tolerance was negative, NaN or infinite.
    #[error("invalid tolerance `{name}`: {value}")]
    InvalidTolerance {
        /// Field name of the offending tolerance.
        name: &'static str,
        /// Value as decoded.
        value: f64,
    },
}
