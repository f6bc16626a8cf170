//! Log source abstraction layer
//!
//! This module provides a trait-based abstraction over the recent-commit
//! source, allowing for multiple implementations including the real system
//! `git` binary and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [LogSource] trait, which defines the single
//! operation git-recent needs. The concrete implementations include:
//!
//! - [git_cli::GitCliSource]: spawns the system `git` binary
//! - [mock::MockLogSource]: a canned implementation for testing
//!
//! Most code should depend on the [LogSource] trait rather than concrete
//! implementations to enable easy testing.

pub mod git_cli;
pub mod mock;

pub use git_cli::GitCliSource;
pub use mock::MockLogSource;

use crate::error::Result;

/// Number of entries requested from the log tool per fetch.
pub const RECENT_COMMIT_LIMIT: usize = 20;

/// Source of recent commit summary lines.
///
/// ## Error Handling
///
/// Implementations return [crate::error::Result] and map underlying failures
/// (process spawn, nonzero exit) to [crate::error::GitRecentError] variants.
/// There is no retry and no partial result: either the full list is returned
/// or an error is.
pub trait LogSource: Send + Sync {
    /// Fetch the most recent commit summary lines, newest first.
    ///
    /// # Returns
    /// * `Ok(lines)` - At most [RECENT_COMMIT_LIMIT] non-empty lines of the
    ///   form `<shortHash> <subject>`, in the order the tool produced them
    /// * `Err` - If the tool could not be invoked or reported failure
    fn recent_commits(&self) -> Result<Vec<String>>;
}
