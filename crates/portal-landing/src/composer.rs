//! Landing page composer.
//!
//! Resolves curated document selections against a navigation tree. Every
//! selected document must appear in the tree; each one that doesn't is
//! reported as [`NavError::UnknownTarget`], all in one pass.

use std::collections::BTreeMap;

use portal_nav::{DocumentId, NavError, NavErrors, NavTree};
use serde::Serialize;

use crate::routes::Routes;
use crate::section::{LandingItem, LandingSection, SectionStyle};

/// Presentation-ready link record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    /// Display title.
    pub title: String,
    /// Target document, `None` for external links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<DocumentId>,
    /// Resolved link.
    pub href: String,
    /// Card text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A landing section with its resolved records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComposedSection {
    /// Section heading.
    pub title: String,
    /// Lead paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    /// Presentation style.
    pub style: SectionStyle,
    /// Records in display order.
    pub records: Vec<DisplayRecord>,
}

/// Document metadata supplied by the content source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentMeta {
    /// Document title.
    pub title: Option<String>,
    /// Document description.
    pub description: Option<String>,
}

/// Composes landing records from a navigation tree.
pub struct Composer<'a> {
    tree: &'a NavTree,
    routes: Routes,
    metadata: BTreeMap<DocumentId, DocumentMeta>,
}

impl<'a> Composer<'a> {
    /// Create a composer over `tree`.
    pub fn new(tree: &'a NavTree, routes: Routes) -> Self {
        Self {
            tree,
            routes,
            metadata: BTreeMap::new(),
        }
    }

    /// Use document metadata for titles and descriptions the tree doesn't provide.
    #[must_use]
    pub fn with_metadata(mut self, metadata: BTreeMap<DocumentId, DocumentMeta>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Build display records for an ordered selection of documents.
    ///
    /// Descriptions come from `descriptions`, falling back to document
    /// metadata. Output order matches `selection`.
    pub fn curate(
        &self,
        selection: &[DocumentId],
        descriptions: &BTreeMap<DocumentId, String>,
    ) -> Result<Vec<DisplayRecord>, NavErrors> {
        let mut records = Vec::with_capacity(selection.len());
        let mut errors = Vec::new();

        for (idx, id) in selection.iter().enumerate() {
            if !self.tree.contains(id.as_str()) {
                errors.push(NavError::unknown(format!("selection[{idx}]"), id.clone()));
                continue;
            }
            records.push(self.record(id, None, descriptions.get(id).cloned()));
        }

        if !errors.is_empty() {
            return Err(NavErrors(errors));
        }
        Ok(records)
    }

    /// Resolve configured landing sections.
    ///
    /// Errors from every section are collected before failing.
    pub fn compose_sections(
        &self,
        sections: &[LandingSection],
    ) -> Result<Vec<ComposedSection>, NavErrors> {
        let mut composed = Vec::with_capacity(sections.len());
        let mut errors = Vec::new();

        for (section_idx, section) in sections.iter().enumerate() {
            let mut records = Vec::with_capacity(section.items.len());
            for (idx, item) in section.items.iter().enumerate() {
                match item {
                    LandingItem::Doc {
                        id,
                        label,
                        description,
                    } => {
                        if !self.tree.contains(id.as_str()) {
                            errors.push(NavError::unknown(
                                format!("landing.sections[{section_idx}].items[{idx}]"),
                                id.clone(),
                            ));
                            continue;
                        }
                        records.push(self.record(id, label.clone(), description.clone()));
                    }
                    LandingItem::External {
                        href,
                        label,
                        description,
                    } => records.push(DisplayRecord {
                        title: label.clone(),
                        target: None,
                        href: href.clone(),
                        description: description.clone(),
                    }),
                }
            }
            composed.push(ComposedSection {
                title: section.title.clone(),
                lead: section.lead.clone(),
                style: section.style,
                records,
            });
        }

        if !errors.is_empty() {
            return Err(NavErrors(errors));
        }
        tracing::debug!(sections = composed.len(), "Composed landing sections");
        Ok(composed)
    }

    fn record(
        &self,
        id: &DocumentId,
        label: Option<String>,
        description: Option<String>,
    ) -> DisplayRecord {
        let meta = self.metadata.get(id);
        DisplayRecord {
            title: label.unwrap_or_else(|| self.title(id, meta)),
            target: Some(id.clone()),
            href: self.routes.href(id),
            description: description.or_else(|| meta.and_then(|m| m.description.clone())),
        }
    }

    /// Tree label, then metadata title, then a title derived from the id.
    fn title(&self, id: &DocumentId, meta: Option<&DocumentMeta>) -> String {
        self.tree
            .title_for(id.as_str())
            .map(str::to_owned)
            .or_else(|| meta.and_then(|m| m.title.clone()))
            .unwrap_or_else(|| humanize(id))
    }
}

/// Derive a title from the last meaningful id segment.
///
/// `tools/s3-utils` -> `S3 utils`, `console/index` -> `Console`.
fn humanize(id: &DocumentId) -> String {
    let segment = id
        .url_path()
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("Home");

    let words = segment.replace(['-', '_'], " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
