//! Per-property failures
//!
//! None of these abort a pass: callers log them, record them and move on to
//! the next property.

/// A single style write that could not be performed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property `{property}`")]
    UnknownProperty { property: String },

    #[error("malformed `{property}` shorthand: {value:?}")]
    MalformedShorthand { property: String, value: String },
}

impl PropertyError {
    /// The property name the failed write targeted
    pub fn property(&self) -> &str {
        match self {
            PropertyError::UnknownProperty { property }
            | PropertyError::MalformedShorthand { property, .. } => property,
        }
    }
}
