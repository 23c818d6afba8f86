//! Navigation error types.

use std::fmt;

use crate::id::{DocumentId, MalformedId};

/// Navigation error.
///
/// `location` is a human-readable entry path such as `docsSidebar[3].items[0]`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Structural authoring error in a sidebar specification.
    #[error("{location}: {reason}")]
    InvalidSpec {
        /// Entry path of the offending entry.
        location: String,
        /// What is wrong with the entry.
        reason: InvalidReason,
    },
    /// Reference to a document that does not exist.
    #[error("{location}: unknown document '{id}'")]
    UnknownTarget {
        /// The dangling document id.
        id: DocumentId,
        /// Entry path of the reference.
        location: String,
    },
}

impl NavError {
    /// Structural error at `location`.
    pub fn invalid(location: impl Into<String>, reason: InvalidReason) -> Self {
        Self::InvalidSpec {
            location: location.into(),
            reason,
        }
    }

    /// Dangling reference at `location`.
    pub fn unknown(location: impl Into<String>, id: DocumentId) -> Self {
        Self::UnknownTarget {
            id,
            location: location.into(),
        }
    }

    /// True for structural errors, which always fail a build.
    #[must_use]
    pub fn is_invalid_spec(&self) -> bool {
        matches!(self, Self::InvalidSpec { .. })
    }
}

/// Reason a sidebar entry is structurally invalid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReason {
    /// Category or link without a non-empty label.
    #[error("entry is missing a label")]
    MissingLabel,
    /// Category with neither items nor a link.
    #[error("category '{0}' has no items and no link")]
    EmptyCategory(String),
    /// Malformed document id.
    #[error(transparent)]
    MalformedId(#[from] MalformedId),
    /// External link without an http(s) URL.
    #[error("link href '{0}' must start with http:// or https://")]
    MalformedHref(String),
    /// Category nesting deeper than allowed.
    #[error("category nesting exceeds the maximum depth of {max}")]
    TooDeep {
        /// Configured maximum.
        max: usize,
    },
    /// Category linking to the same document as an enclosing category.
    #[error("category links to '{0}', which an enclosing category already links to")]
    CyclicLink(DocumentId),
    /// Unsupported `type` value.
    #[error("unknown entry type '{0}'")]
    UnknownType(String),
    /// Required field not present.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    /// Sidebar document could not be parsed.
    #[error("{0}")]
    Parse(String),
}

/// Every navigation error found in one pass.
///
/// Builders never stop at the first violation, so authors see all broken
/// entries in a single pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavErrors(pub Vec<NavError>);

impl NavErrors {
    /// The collected errors, in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[NavError] {
        &self.0
    }

    /// Number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no errors were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NavErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} navigation error(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for NavErrors {}

impl IntoIterator for NavErrors {
    type Item = NavError;
    type IntoIter = std::vec::IntoIter<NavError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
