//! Error types for the form model and the advisory boundary.
//!
//! Editor operations never fail: stale ids are no-ops. Errors only arise when
//! a design is assembled from untrusted input or when the suggestion service
//! cannot answer.

use thiserror::Error;

use crate::component::ComponentId;

/// Result type alias for schema construction.
pub type FormResult<T> = Result<T, FormError>;

/// Result type alias for advisory requests.
pub type SuggestResult<T> = Result<T, SuggestError>;

/// Error assembling a form design.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Two components in the same design share an id.
    #[error("Duplicate component id: {0}")]
    DuplicateId(ComponentId),

    /// Text could not be parsed as a component id.
    #[error("Invalid component id '{input}': {message}")]
    InvalidId { input: String, message: String },
}

impl FormError {
    /// Create an invalid id error.
    pub fn invalid_id(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidId {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Failure reported by the advisory suggestion service.
///
/// None of these roll back anything: a suggestion is only applied after the
/// service answers successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// The label was empty, so there is nothing to ask about.
    #[error("Cannot suggest a field type for an empty label")]
    EmptyLabel,

    /// The service could not be reached or timed out.
    #[error("Suggestion service unavailable: {0}")]
    Unavailable(String),

    /// The service answered without a usable suggestion.
    #[error("No suggestion available for '{0}'")]
    NoSuggestion(String),

    /// The service answered with something that is not a suggestion.
    #[error("Invalid suggestion response: {0}")]
    InvalidResponse(String),
}

impl SuggestError {
    /// Whether asking again later could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::NoSuggestion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(SuggestError::Unavailable("timeout".into()).is_retryable());
        assert!(SuggestError::NoSuggestion("Name".into()).is_retryable());
        assert!(!SuggestError::EmptyLabel.is_retryable());
        assert!(!SuggestError::InvalidResponse("not json".into()).is_retryable());
    }

    #[test]
    fn test_error_messages() {
        let err = FormError::invalid_id("abc", "not a uuid");
        assert_eq!(err.to_string(), "Invalid component id 'abc': not a uuid");

        let err = SuggestError::NoSuggestion("Favorite Color".into());
        assert_eq!(err.to_string(), "No suggestion available for 'Favorite Color'");
    }
}
