use thiserror::Error;

/// Top-level error type for the staffgraph service.
#[derive(Error, Debug)]
pub enum StaffError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for StaffError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
