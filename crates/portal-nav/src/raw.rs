//! Raw, user-authored sidebar specifications.
//!
//! Sidebar files mix plain strings (document shorthand) with records carrying
//! a `type` field. These types mirror that authoring form exactly; the builder
//! resolves them into [`NavEntry`](crate::NavEntry) values once, so nothing
//! downstream handles "either a string or an object".
//!
//! Sidebar files are YAML. JSON documents parse as well since YAML is a superset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidReason, NavError};

/// Raw sidebars document: sidebar id to its top-level items.
pub type RawSidebars = BTreeMap<String, Vec<RawItem>>;

/// A raw sidebar item as authored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawItem {
    /// Document shorthand (`"intro"`).
    Shorthand(String),
    /// Record with a `type` field.
    Record(RawRecord),
    /// Anything else (numbers, booleans, nested lists). Rejected by the
    /// builder with the entry's location.
    Other(serde_yaml::Value),
}

/// A raw record item (`doc`, `category`, or `link`).
///
/// Unknown keys (class names, custom props) are accepted and ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Entry type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Document id for `doc` records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// External URL for `link` records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Landing document for `category` records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<RawLink>,
    /// Children of `category` records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RawItem>>,
    /// Initial collapsed state of `category` records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

/// Raw category link: a bare id or a `{type: doc, id}` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLink {
    /// Bare document id.
    Id(String),
    /// Link record.
    Record {
        /// Link type (`doc`).
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        /// Linked document id.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
}

impl RawItem {
    /// Shorthand document item.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Shorthand(id.into())
    }

    /// Category record without a link.
    pub fn category(label: impl Into<String>, items: Vec<RawItem>) -> Self {
        Self::Record(RawRecord {
            kind: Some("category".to_owned()),
            label: Some(label.into()),
            items: Some(items),
            ..RawRecord::default()
        })
    }

    /// Category record linking to a landing document.
    pub fn linked_category(
        label: impl Into<String>,
        link: impl Into<String>,
        items: Vec<RawItem>,
    ) -> Self {
        Self::Record(RawRecord {
            kind: Some("category".to_owned()),
            label: Some(label.into()),
            link: Some(RawLink::doc(link)),
            items: Some(items),
            ..RawRecord::default()
        })
    }

    /// External link record.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Record(RawRecord {
            kind: Some("link".to_owned()),
            label: Some(label.into()),
            href: Some(href.into()),
            ..RawRecord::default()
        })
    }
}

impl RawLink {
    /// `{type: doc, id}` link record.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Record {
            kind: Some("doc".to_owned()),
            id: Some(id.into()),
        }
    }
}

/// Parse a sidebars document from YAML or JSON text.
pub fn parse_sidebars(content: &str) -> Result<RawSidebars, NavError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(RawSidebars::new());
    }
    serde_yaml::from_str(trimmed).map_err(|e| {
        NavError::invalid(
            "<sidebars>",
            InvalidReason::Parse(format!("Invalid sidebars document: {e}")),
        )
    })
}
