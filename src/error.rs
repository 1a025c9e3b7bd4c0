//! Error types for the torrent exporter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Login failed: {0}")]
    Authentication(String),

    #[error("Unexpected HTTP status {status} from {endpoint}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    // Data errors
    #[error("Malformed torrent record: {0}")]
    MalformedTorrent(String),

    #[error("Malformed tracker list: {0}")]
    MalformedTrackers(String),

    // File system errors
    #[error("Failed to create or access output directory {}: {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for an error that aborted the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::ConfigValidation { .. } | Error::UrlParse(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::Authentication(_)
            | Error::Api(_)
            | Error::Status { .. }
            | Error::Http(_)
            | Error::Json(_) => exit_codes::API_ERROR,
            Error::OutputDirectory { .. } | Error::Io(_) => exit_codes::FILESYSTEM_ERROR,
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const FILESYSTEM_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_errors_map_to_nonzero_codes() {
        let auth = Error::Authentication("Fails.".into());
        assert_eq!(auth.exit_code(), exit_codes::API_ERROR);

        let dir = Error::OutputDirectory {
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(dir.exit_code(), exit_codes::FILESYSTEM_ERROR);

        let cfg = Error::Config("bad".into());
        assert_eq!(cfg.exit_code(), exit_codes::CONFIG_ERROR);

        for code in [auth.exit_code(), dir.exit_code(), cfg.exit_code()] {
            assert_ne!(code, exit_codes::SUCCESS);
        }
    }

    #[test]
    fn test_output_directory_message_names_path() {
        let err = Error::OutputDirectory {
            path: PathBuf::from("/srv/torrents"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        };
        assert!(err.to_string().contains("/srv/torrents"));
    }
}
