//! Curated landing sections as authored in configuration.

use portal_nav::DocumentId;
use serde::{Deserialize, Serialize};

/// Presentation style of a landing section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStyle {
    /// Cards with title, description, and a call to action.
    #[default]
    Cards,
    /// Compact pill links.
    Pills,
}

/// A curated landing section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LandingSection {
    /// Section heading.
    pub title: String,
    /// Lead paragraph under the heading.
    #[serde(default)]
    pub lead: Option<String>,
    /// Presentation style.
    #[serde(default)]
    pub style: SectionStyle,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<LandingItem>,
}

/// A landing section item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LandingItem {
    /// Link to a document in the navigation tree.
    Doc {
        /// Target document.
        id: DocumentId,
        /// Label overriding the resolved title.
        #[serde(default)]
        label: Option<String>,
        /// Card text.
        #[serde(default)]
        description: Option<String>,
    },
    /// Link outside the docs, passed through verbatim.
    External {
        /// Absolute URL.
        href: String,
        /// Display label.
        label: String,
        /// Card text.
        #[serde(default)]
        description: Option<String>,
    },
}
