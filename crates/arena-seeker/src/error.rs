//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when parsing clauses or building sort keys.
///
/// Inside a filter pass none of these are fatal: the engine drops the
/// offending clause and carries on. They only reach callers through the
/// explicit parsing entry points and explicit sort requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeekerError {
    /// No schema entry matches the given attribute name.
    #[error("unknown attribute: '{0}'")]
    UnknownAttribute(String),

    /// The clause has no operator, or an empty attribute or value segment.
    #[error("malformed clause '{clause}': {reason}")]
    MalformedClause {
        clause: String,
        reason: &'static str,
    },

    /// A numeric attribute was given a value that does not parse.
    #[error("value '{value}' is not a valid number for {attribute}")]
    UnparseableValue {
        attribute: &'static str,
        value: String,
    },

    /// The attribute exists but the schema forbids sorting by it.
    #[error("sorting by {0} is not allowed")]
    UnsortableAttribute(&'static str),

    /// The attribute exists but the schema forbids filtering by it.
    #[error("filtering by {0} is not allowed")]
    UnfilterableAttribute(&'static str),

    /// Sort direction other than `asc` or `desc`.
    #[error("invalid sort direction: '{0}' (expected asc or desc)")]
    InvalidDirection(String),
}

impl SeekerError {
    pub(crate) fn malformed(clause: &str, reason: &'static str) -> Self {
        SeekerError::MalformedClause {
            clause: clause.to_string(),
            reason,
        }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
