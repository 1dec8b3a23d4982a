use thiserror::Error;

/// Failures at the outer boundary of the crate.
///
/// Query construction and response normalization never fail; malformed input
/// degrades their output instead. Only reading settings and payloads can err.
#[derive(Error, Debug)]
pub enum OdataqError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Input error: {0}")]
    Input(String),
    #[error("JSON error: {message}")]
    Json { message: String, line: Option<usize>, col: Option<usize> },
}

pub type Result<T> = std::result::Result<T, OdataqError>;

// Helper conversions
impl From<config::ConfigError> for OdataqError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<std::io::Error> for OdataqError {
    fn from(e: std::io::Error) -> Self { Self::Input(e.to_string()) }
}
impl From<serde_json::Error> for OdataqError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string(), line: Some(e.line()), col: Some(e.column()) }
    }
}
