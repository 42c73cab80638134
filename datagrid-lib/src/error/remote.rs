//! Errors reported by data sources, row actions and image resolvers

use std::error::Error as StdError;
use std::sync::Arc;

/// An error returned by a caller-supplied collaborator.
///
/// Sources and actions live outside the grid, so their failures arrive in
/// whatever shape the caller produces. Some backends reject with a list of
/// errors; [`RemoteError::normalize`] reduces that to the first entry before
/// the grid stores it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoteError {
    /// A plain error message.
    #[error("{0}")]
    Message(String),

    /// Several errors reported together.
    #[error("{}", batch_message(.0))]
    Batch(Vec<RemoteError>),

    /// Any other error value.
    #[error("{0}")]
    Source(Arc<dyn StdError + Send + Sync>),
}

impl RemoteError {
    /// Creates an error from a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Wraps an arbitrary error value.
    pub fn other<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Source(Arc::new(error))
    }

    /// Unwraps a batch to its first element; every other shape passes through.
    ///
    /// An empty batch is kept as is.
    pub fn normalize(self) -> Self {
        match self {
            Self::Batch(mut errors) if !errors.is_empty() => errors.swap_remove(0),
            other => other,
        }
    }
}

impl From<String> for RemoteError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for RemoteError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<Vec<RemoteError>> for RemoteError {
    fn from(errors: Vec<RemoteError>) -> Self {
        Self::Batch(errors)
    }
}

fn batch_message(errors: &[RemoteError]) -> String {
    match errors.first() {
        Some(first) => first.to_string(),
        None => "unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unwraps_first_batch_entry() {
        let error = RemoteError::Batch(vec![
            RemoteError::message("first"),
            RemoteError::message("second"),
        ]);
        assert_eq!(error.normalize().to_string(), "first");
    }

    #[test]
    fn test_normalize_only_unwraps_one_level() {
        let nested = RemoteError::Batch(vec![RemoteError::Batch(vec![
            RemoteError::message("inner"),
        ])]);
        assert!(matches!(nested.normalize(), RemoteError::Batch(_)));
    }

    #[test]
    fn test_normalize_passes_other_errors_through() {
        let error = RemoteError::other(std::io::Error::other("disk gone"));
        assert_eq!(error.normalize().to_string(), "disk gone");
    }

    #[test]
    fn test_empty_batch_kept() {
        let error = RemoteError::Batch(Vec::new()).normalize();
        assert!(matches!(&error, RemoteError::Batch(v) if v.is_empty()));
        assert_eq!(error.to_string(), "unknown error");
    }
}
