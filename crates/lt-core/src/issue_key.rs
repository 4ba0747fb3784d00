//! Issue identifiers.

use std::fmt;

use crate::errors::CoreError;

/// A trimmed, non-empty issue identifier such as `PROJ-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueKey(String);

impl IssueKey {
    /// Trim `raw` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyIssueKey`] if nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyIssueKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IssueKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let key = IssueKey::parse("  PROJ-42\t").unwrap();
        assert_eq!(key.as_str(), "PROJ-42");
        assert_eq!(key.to_string(), "PROJ-42");
    }

    #[test]
    fn blank_keys_are_rejected() {
        assert_eq!(IssueKey::parse(""), Err(CoreError::EmptyIssueKey));
        assert_eq!(IssueKey::parse("   "), Err(CoreError::EmptyIssueKey));
    }
}
