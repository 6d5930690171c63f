//! Error types for notesieve.

use thiserror::Error;

/// Result type alias using notesieve's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notesieve operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A single document's content or metadata could not be read.
    /// Recovered per document during a scan.
    #[error("Document read error: {0}")]
    DocumentRead(String),

    /// The corpus as a whole cannot be enumerated.
    #[error("Corpus unavailable: {0}")]
    CorpusUnavailable(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error is confined to one document and the scan can go on.
    pub fn is_document_local(&self) -> bool {
        matches!(self, Error::DocumentRead(_) | Error::NotFound(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_document_read() {
        let err = Error::DocumentRead("notes/a.md".to_string());
        assert_eq!(err.to_string(), "Document read error: notes/a.md");
    }

    #[test]
    fn test_error_display_corpus_unavailable() {
        let err = Error::CorpusUnavailable("/vault is not a directory".to_string());
        assert_eq!(
            err.to_string(),
            "Corpus unavailable: /vault is not a directory"
        );
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("unknown match mode: XOR".to_string());
        assert_eq!(err.to_string(), "Invalid input: unknown match mode: XOR");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("page size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: page size must be positive"
        );
    }

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.to_string().contains("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("tags: [unclosed").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_document_local_classification() {
        assert!(Error::DocumentRead("x".into()).is_document_local());
        assert!(Error::NotFound("x".into()).is_document_local());
        assert!(!Error::CorpusUnavailable("x".into()).is_document_local());
        assert!(!Error::Config("x".into()).is_document_local());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
