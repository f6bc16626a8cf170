//! The `GET /api/git-log` contract, minus the socket.
//!
//! One fetch against a [LogSource], collapsed into the two wire shapes the
//! route serves: `200 {"commits": [...]}` on success and
//! `500 {"error": "Failed to fetch git log"}` on any failure. The underlying
//! failure detail is written to the log only; the response body stays generic.

use serde::{Deserialize, Serialize};

use crate::source::LogSource;

/// Generic message served for any log tool failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch git log";

/// Success body: the raw commit lines, newest first, at most 20.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitList {
    pub commits: Vec<String>,
}

/// Failure body: a generic error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Outcome of one `GET /api/git-log` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitLogResponse {
    Ok(CommitList),
    Failed(ApiError),
}

impl GitLogResponse {
    /// HTTP status code for this response.
    pub fn status(&self) -> u16 {
        match self {
            GitLogResponse::Ok(_) => 200,
            GitLogResponse::Failed(_) => 500,
        }
    }

    /// Serialize the response body to its JSON wire form.
    pub fn body(&self) -> String {
        // Both shapes are plain structs of strings; serialization cannot fail.
        match self {
            GitLogResponse::Ok(list) => {
                serde_json::to_string(list).unwrap_or_else(|_| "{\"commits\":[]}".to_string())
            }
            GitLogResponse::Failed(err) => serde_json::to_string(err)
                .unwrap_or_else(|_| format!("{{\"error\":\"{}\"}}", FETCH_FAILED_MESSAGE)),
        }
    }

    /// The commit lines, if this is a success response.
    pub fn commits(&self) -> Option<&[String]> {
        match self {
            GitLogResponse::Ok(list) => Some(&list.commits),
            GitLogResponse::Failed(_) => None,
        }
    }
}

/// Handle one request: a single fetch, no retry, no partial result.
///
/// Any source failure collapses into the generic 500 shape. The failure
/// detail has already been logged by the source; nothing of it reaches the
/// response body.
pub fn fetch_git_log(source: &impl LogSource) -> GitLogResponse {
    match source.recent_commits() {
        Ok(commits) => GitLogResponse::Ok(CommitList { commits }),
        Err(_) => GitLogResponse::Failed(ApiError {
            error: FETCH_FAILED_MESSAGE.to_string(),
        }),
    }
}
