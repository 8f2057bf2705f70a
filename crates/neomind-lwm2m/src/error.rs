//! Error types for identifier resolution and path handling.

/// Errors raised by the LwM2M identifier layer.
///
/// Identifier lookups never fail: an unknown identifier is reported as
/// `None` or replaced by a lenient fallback. Errors only come from invalid
/// path construction arguments and from dictionary configuration.
#[derive(Debug, thiserror::Error)]
pub enum Lwm2mError {
    /// Wrong argument passed to a path construction function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Dictionary extension clashes with an existing entry
    #[error("Conflicting dictionary entry: {0}")]
    Conflict(String),

    /// Dictionary extension references an object that is not defined
    #[error("Unknown object: {0}")]
    UnknownObject(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Lwm2mError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Lwm2mError::InvalidArgument("segment is NaN".to_string());
        assert_eq!(err.to_string(), "Invalid argument: segment is NaN");

        let err = Lwm2mError::Conflict("object 'device' is already 3".to_string());
        assert!(err.to_string().contains("already 3"));
    }

    #[test]
    fn test_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Lwm2mError = parse_err.into();
        assert!(matches!(err, Lwm2mError::Serialization(_)));
    }
}
