use crate::error::{GitRecentError, Result};
use crate::source::LogSource;

/// Mock log source for testing without spawning git
pub struct MockLogSource {
    lines: Vec<String>,
    fail_with: Option<String>,
}

impl MockLogSource {
    /// Create a mock that returns the given lines
    pub fn with_lines(lines: Vec<&str>) -> Self {
        MockLogSource {
            lines: lines.into_iter().map(|l| l.to_string()).collect(),
            fail_with: None,
        }
    }

    /// Create a mock that returns no commits
    pub fn empty() -> Self {
        MockLogSource {
            lines: Vec::new(),
            fail_with: None,
        }
    }

    /// Create a mock whose fetch fails with the given detail
    pub fn failing(detail: impl Into<String>) -> Self {
        MockLogSource {
            lines: Vec::new(),
            fail_with: Some(detail.into()),
        }
    }
}

impl LogSource for MockLogSource {
    fn recent_commits(&self) -> Result<Vec<String>> {
        match &self.fail_with {
            Some(detail) => Err(GitRecentError::log_tool(detail.clone())),
            None => Ok(self.lines.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_lines() {
        let source = MockLogSource::with_lines(vec!["abc1234 feat: one", "def5678 fix: two"]);
        let commits = source.recent_commits().unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0], "abc1234 feat: one");
    }

    #[test]
    fn test_mock_source_empty() {
        let source = MockLogSource::empty();
        assert!(source.recent_commits().unwrap().is_empty());
    }

    #[test]
    fn test_mock_source_failure() {
        let source = MockLogSource::failing("not a git repository");
        let err = source.recent_commits().unwrap_err();
        assert!(err.to_string().contains("not a git repository"));
    }
}
