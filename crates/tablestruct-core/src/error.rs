/// Errors raised while reading or validating a mapping description.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not well-formed or a field has the wrong kind.
    #[error("malformed mapping description: {0}")]
    MalformedDescription(#[from] serde_json::Error),

    /// A table mapping breaks one of the model's invariants.
    #[error("invalid mapping for table `{table}`: {reason}")]
    InvariantViolation { table: String, reason: String },
}

impl Error {
    pub(crate) fn invariant(table: &str, reason: impl Into<String>) -> Error {
        Error::InvariantViolation {
            table: table.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error comes from a cross-field check rather than
    /// from parsing.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::InvariantViolation { .. })
    }
}
