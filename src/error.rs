//! Custom error types for issues-to-project.

use thiserror::Error;

/// Main error type for filing operations.
#[derive(Error, Debug)]
pub enum FilerError {
    // Input errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Resolution errors
    #[error("Project #{number} not found for organization '{org}'")]
    ProjectNotFound { org: String, number: u64 },

    #[error("Column '{column}' not found in project '{project}'")]
    ColumnNotFound { project: String, column: String },

    #[error("Project '{project}' has no columns")]
    NoColumns { project: String },

    // Forge/API errors
    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using FilerError
pub type Result<T> = std::result::Result<T, FilerError>;

impl FilerError {
    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a project not found error
    pub fn project_not_found(org: impl Into<String>, number: u64) -> Self {
        Self::ProjectNotFound {
            org: org.into(),
            number,
        }
    }

    /// Create a column not found error
    pub fn column_not_found(
        project: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self::ColumnNotFound {
            project: project.into(),
            column: column.into(),
        }
    }
}

// Implement From for std::io::Error - wraps in Other variant for I/O errors
impl From<std::io::Error> for FilerError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for FilerError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}
