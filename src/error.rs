use thiserror::Error;

/// Failure while loading Treasury series from FRED.
///
/// Either variant aborts the whole multi-tenor load; no partial table is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request could not be completed or returned a non-success status.
    #[error("FRED request for {series_id} failed: {message}")]
    Network { series_id: String, message: String },

    /// The response body was not CSV with the expected date/value columns.
    #[error("Failed to parse FRED CSV for {series_id}: {message}")]
    Parse { series_id: String, message: String },
}

impl LoadError {
    pub fn network(series_id: &str, message: impl Into<String>) -> Self {
        Self::Network {
            series_id: series_id.to_string(),
            message: message.into(),
        }
    }

    pub fn parse(series_id: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            series_id: series_id.to_string(),
            message: message.into(),
        }
    }

    pub fn series_id(&self) -> &str {
        match self {
            Self::Network { series_id, .. } | Self::Parse { series_id, .. } => series_id,
        }
    }
}

/// Error surfaced by the `ust` binary: a message plus a process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::new(4, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
