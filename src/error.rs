use std::io;
use thiserror::Error;

/// Custom error type for the sysguard application
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sampling error: {0}")]
    Sampling(String),

    #[error("Notifier error: {0}")]
    Notifier(String),

    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias for the sysguard application
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MonitorError::Config(msg.into())
    }

    /// Create a sampling error
    pub fn sampling<S: Into<String>>(msg: S) -> Self {
        MonitorError::Sampling(msg.into())
    }

    /// Create a notifier error
    pub fn notifier<S: Into<String>>(msg: S) -> Self {
        MonitorError::Notifier(msg.into())
    }

    /// Create an export error
    pub fn export<S: Into<String>>(msg: S) -> Self {
        MonitorError::Export(msg.into())
    }
}
