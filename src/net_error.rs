//! `NetWeaveError`: unified error type for net-weave public APIs.
//!
//! Only validation and family-tag parsing can fail. Generation and metrics
//! are total once parameters have been validated, so they return plain
//! values with no error path.

use itertools::Itertools;
use thiserror::Error;

/// A single violated parameter constraint.
///
/// The validator reports every violation it finds rather than stopping at
/// the first, so a parameter form can flag all offending fields at once.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamViolation {
    /// A field the family requires was not supplied.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    /// A supplied field lies outside its allowed range.
    #[error("`{field}` = {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// Individually bounded fields still combine into a topology larger
    /// than the global safety cap.
    #[error("derived node count {computed} exceeds safety cap {cap}")]
    TooLarge { computed: u64, cap: u64 },
}

/// Unified error type for net-weave operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetWeaveError {
    /// Unrecognized topology family tag.
    #[error("unknown topology family `{0}`")]
    UnknownFamily(String),
    /// One or more parameter constraints were violated.
    #[error("invalid parameters: {}", .0.iter().join("; "))]
    InvalidParams(Vec<ParamViolation>),
}

impl NetWeaveError {
    /// The violation list carried by an `InvalidParams` error, empty otherwise.
    pub fn violations(&self) -> &[ParamViolation] {
        match self {
            NetWeaveError::InvalidParams(violations) => violations,
            NetWeaveError::UnknownFamily(_) => &[],
        }
    }
}
