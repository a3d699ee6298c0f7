//! Error types for the kaigi client.

use thiserror::Error;

/// Result type alias using kaigi's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for kaigi client operations.
///
/// User-facing messages (the Japanese strings shown in the UI) travel in the
/// variant payload; the variant itself encodes the error category so callers
/// can distinguish a transport failure from a backend rejection.
#[derive(Error, Debug)]
pub enum Error {
    /// File rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure before any response was received
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out before completion
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Backend returned a non-2xx status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body was not valid JSON despite a success status
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The message to show the user, without the category prefix.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(m)
            | Error::Network(m)
            | Error::Timeout(m)
            | Error::Parse(m)
            | Error::Config(m)
            | Error::Internal(m) => m.clone(),
            Error::Server { message, .. } => message.clone(),
            Error::Io(e) => e.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout(e.to_string())
        } else {
            Error::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let err = Error::Validation("ファイル拡張子が見つかりません".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: ファイル拡張子が見つかりません"
        );
    }

    #[test]
    fn test_error_display_network() {
        let err = Error::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_error_display_timeout() {
        let err = Error::Timeout("deadline elapsed".to_string());
        assert_eq!(err.to_string(), "Timeout: deadline elapsed");
    }

    #[test]
    fn test_error_display_server() {
        let err = Error::Server {
            status: 422,
            message: "unsupported format".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (422): unsupported format");
    }

    #[test]
    fn test_error_display_parse() {
        let err = Error::Parse("unexpected token".to_string());
        assert_eq!(err.to_string(), "Parse error: unexpected token");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing base URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing base URL");
    }

    #[test]
    fn test_user_message_strips_category() {
        let err = Error::Network("ネットワークエラーが発生しました".to_string());
        assert_eq!(err.user_message(), "ネットワークエラーが発生しました");

        let err = Error::Server {
            status: 500,
            message: "アップロードに失敗しました (status: 500)".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "アップロードに失敗しました (status: 500)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }
}
