//! Document identifiers.
//!
//! A [`DocumentId`] is a path-like string naming one content document, such as
//! `intro` or `console/getting-started`. Ids are validated once at construction
//! so the rest of the crate never handles malformed references.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a single content document.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

/// Error returned when a string is not a well-formed document id.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed document id '{id}': {problem}")]
pub struct MalformedId {
    /// The rejected input.
    pub id: String,
    /// What is wrong with it.
    pub problem: &'static str,
}

impl DocumentId {
    /// Parse and validate a document id.
    ///
    /// Rejects empty ids, leading or trailing `/`, empty segments, `.` and `..`
    /// segments, backslashes, whitespace, and control characters.
    pub fn parse(value: impl Into<String>) -> Result<Self, MalformedId> {
        let value = value.into();
        match check(&value) {
            Ok(()) => Ok(Self(value)),
            Err(problem) => Err(MalformedId { id: value, problem }),
        }
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments of the id.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Route suffix of the document, relative to the docs route base.
    ///
    /// A trailing `index` segment names its directory:
    /// - `intro` -> `intro`
    /// - `console/index` -> `console`
    /// - `index` -> `""`
    #[must_use]
    pub fn url_path(&self) -> &str {
        if self.0 == "index" {
            ""
        } else {
            self.0.strip_suffix("/index").unwrap_or(&self.0)
        }
    }

    /// True if the id names a directory index document.
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.segments().last() == Some("index")
    }
}

fn check(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("id is empty");
    }
    if value.starts_with('/') || value.ends_with('/') {
        return Err("id cannot start or end with '/'");
    }
    if value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == '\\')
    {
        return Err("id contains whitespace, control characters, or '\\'");
    }
    for segment in value.split('/') {
        match segment {
            "" => return Err("id contains an empty path segment"),
            "." | ".." => return Err("id contains a relative path segment"),
            _ => {}
        }
    }
    Ok(())
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocumentId {
    type Error = MalformedId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for DocumentId {
    type Err = MalformedId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DocumentId {
    type Error = MalformedId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_path_like_ids() {
        for id in ["intro", "tools/s3-utils", "ai-components/agents/index", "v1.2/notes"] {
            assert_eq!(DocumentId::parse(id).unwrap().as_str(), id);
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = DocumentId::parse("").unwrap_err();
        assert_eq!(err.problem, "id is empty");
    }

    #[test]
    fn test_parse_rejects_leading_and_trailing_slash() {
        assert!(DocumentId::parse("/intro").is_err());
        assert!(DocumentId::parse("console/").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_and_relative_segments() {
        assert!(DocumentId::parse("a//b").is_err());
        assert!(DocumentId::parse("a/./b").is_err());
        assert!(DocumentId::parse("../secrets").is_err());
    }

    #[test]
    fn test_parse_rejects_whitespace_and_backslash() {
        assert!(DocumentId::parse("getting started").is_err());
        assert!(DocumentId::parse("tools\\a").is_err());
        assert!(DocumentId::parse("intro\n").is_err());
    }

    #[test]
    fn test_malformed_id_message_names_input() {
        let err = DocumentId::parse("a//b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed document id 'a//b': id contains an empty path segment"
        );
    }

    #[test]
    fn test_url_path_strips_index() {
        let id = |s: &str| DocumentId::parse(s).unwrap();
        assert_eq!(id("intro").url_path(), "intro");
        assert_eq!(id("console/index").url_path(), "console");
        assert_eq!(id("ai-components/agents/index").url_path(), "ai-components/agents");
        assert_eq!(id("index").url_path(), "");
        assert_eq!(id("reindex").url_path(), "reindex");
    }

    #[test]
    fn test_is_index() {
        assert!(DocumentId::parse("console/index").unwrap().is_index());
        assert!(DocumentId::parse("index").unwrap().is_index());
        assert!(!DocumentId::parse("console/reindex").unwrap().is_index());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: DocumentId = serde_json::from_str("\"tools/a\"").unwrap();
        assert_eq!(ok.as_str(), "tools/a");

        let err = serde_json::from_str::<DocumentId>("\"tools//a\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_borrow_allows_str_lookup() {
        let set: std::collections::BTreeSet<DocumentId> =
            [DocumentId::parse("intro").unwrap()].into_iter().collect();
        assert!(set.contains("intro"));
        assert!(!set.contains("outro"));
    }

    #[test]
    fn test_from_str() {
        let id: DocumentId = "console/index".parse().unwrap();
        assert_eq!(id.url_path(), "console");
        assert!("/console".parse::<DocumentId>().is_err());
    }
}
