//! Error types for Ledgerkit operations.

/// Comprehensive error type for Ledgerkit operations.
///
/// Everything here is raised synchronously at the point of detection;
/// nothing is caught-and-logged internally and nothing leaves partial state
/// behind.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The supplied app id violates the character-set or length rules.
    ///
    /// Never retried; the caller must supply a corrected value.
    #[error("invalid app id: expected exactly 4 ASCII alphanumeric characters")]
    InvalidAppId,

    /// A whitelist payload or canonical byte stream failed to parse.
    ///
    /// Represents untrusted or corrupt input; surfaced to the caller rather
    /// than silently defaulted.
    #[error("decode error: {0}")]
    Decode(String),

    /// Serialization failed while producing an outgoing payload.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert!(Error::InvalidAppId.to_string().contains("app id"));
        let err = Error::Decode("3 trailing bytes after value".into());
        assert!(err.to_string().starts_with("decode error"));
        assert!(err.to_string().contains("trailing"));
    }

    #[test]
    fn json_errors_map_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
