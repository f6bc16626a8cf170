use regex::Regex;

/// Structured form of one `git log --oneline` line.
///
/// Derived deterministically from exactly one raw line. When the line does not
/// match the `<hash> <subject>` shape, `hash` and `r#type` are empty and
/// `message` carries the whole line. When the subject does not follow the
/// conventional `type(scope): message` convention, `r#type` is empty and
/// `message` carries the whole subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub hash: String,
    pub r#type: String,
    pub message: String,
    /// The original input line, verbatim, regardless of parse success.
    /// Always safe to display as a fallback.
    pub full_line: String,
}

impl ParsedCommit {
    /// Parse one log line into its structured form.
    ///
    /// Total function: never fails, never drops input. Supported shapes:
    /// - `a1b2c3d feat: add login page`
    /// - `a1b2c3d fix(auth): handle expired token` (scope parsed, discarded)
    /// - `a1b2c3d cleanup old files` (no conventional prefix)
    /// - anything else (empty line, uppercase hash, merge decoration)
    ///
    /// The hash is a lowercase hexadecimal run as printed by `--oneline`;
    /// lines that deviate fall back to an empty hash with the whole line as
    /// the message. Any word run before a colon is accepted as a type; types
    /// are not validated against a known set.
    pub fn parse(line: &str) -> Self {
        let hash_re = Regex::new(r"^([0-9a-f]+) +(.*)$").ok();
        let captures = hash_re.as_ref().and_then(|re| re.captures(line));

        let (hash, subject) = match captures {
            Some(caps) => {
                let hash = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                let subject = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
                (hash.to_string(), subject.to_string())
            }
            None => {
                return ParsedCommit {
                    hash: String::new(),
                    r#type: String::new(),
                    message: line.to_string(),
                    full_line: line.to_string(),
                };
            }
        };

        // Scope group is matched so the colon pattern applies, but never surfaces.
        if let Some(caps) = Regex::new(r"^(\w+)(\([^)]*\))?:\s*(.*)$")
            .ok()
            .and_then(|re| re.captures(&subject))
        {
            let r#type = caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default();
            let message = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();

            return ParsedCommit {
                hash,
                r#type,
                message,
                full_line: line.to_string(),
            };
        }

        ParsedCommit {
            hash,
            r#type: String::new(),
            message: subject,
            full_line: line.to_string(),
        }
    }
}
