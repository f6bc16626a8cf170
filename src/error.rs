use thiserror::Error;

/// Unified error type for git-recent operations
#[derive(Error, Debug)]
pub enum GitRecentError {
    #[error("Log tool failed: {0}")]
    LogTool(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-recent
pub type Result<T> = std::result::Result<T, GitRecentError>;

impl GitRecentError {
    /// Create a log tool error with context
    pub fn log_tool(msg: impl Into<String>) -> Self {
        GitRecentError::LogTool(msg.into())
    }
}
