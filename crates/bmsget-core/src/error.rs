use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse chart {path}: {message}")]
    ChartParse { path: PathBuf, message: String },

    #[error("Failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    #[error("Failed to load difficulty table {path}: {message}")]
    TableLoad { path: PathBuf, message: String },

    #[error("Song database error: {0}")]
    SongData(#[from] rusqlite::Error),

    #[error("Unexpected search page markup: {0}")]
    SearchParse(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("{0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let message = match &e {
            ureq::Error::StatusCode(code) => format!("HTTP {} error", code),
            ureq::Error::Timeout(_) => format!("Request timed out: {}", e),
            ureq::Error::ConnectionFailed => format!("Connection failed: {}", e),
            _ => format!("HTTP error: {}", e),
        };
        Error::Http(message)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Archive(e.to_string())
    }
}
