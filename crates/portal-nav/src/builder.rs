//! Sidebar specification builder.
//!
//! Normalizes [`RawItem`] specifications into [`NavTree`] values. Shorthand
//! strings become leaves, records are resolved by their `type`, and every
//! structural violation is collected before failing.
//!
//! # Example
//!
//! ```
//! use portal_nav::{BuildOptions, RawItem, build};
//!
//! let raw = vec![
//!     RawItem::doc("intro"),
//!     RawItem::category("Tools", vec![RawItem::doc("tools/a"), RawItem::doc("tools/b")]),
//! ];
//! let tree = build("docsSidebar", &raw, &BuildOptions::default()).unwrap();
//! assert_eq!(tree.entries().len(), 2);
//! ```

use std::collections::{BTreeMap, HashSet};

use crate::entry::{NavEntry, NavTree, Sidebars};
use crate::error::{InvalidReason, NavError, NavErrors};
use crate::id::DocumentId;
use crate::raw::{RawItem, RawLink, RawRecord, RawSidebars};

/// Default maximum category nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Builder options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Maximum category nesting depth. Top-level categories have depth 1.
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Build one navigation tree.
///
/// Returns the complete tree, or every structural error found. Never returns
/// a partially built tree.
pub fn build(
    sidebar: &str,
    items: &[RawItem],
    options: &BuildOptions,
) -> Result<NavTree, NavErrors> {
    let mut builder = TreeBuilder::new(options);
    let entries = builder.entries(items, sidebar, 1, &mut Vec::new());

    if !builder.errors.is_empty() {
        return Err(NavErrors(builder.errors));
    }

    warn_duplicates(sidebar, &entries);
    tracing::debug!(sidebar, entries = entries.len(), "Built navigation tree");
    Ok(NavTree::new(sidebar.to_owned(), entries))
}

/// Build every sidebar of a sidebars document.
///
/// Errors from all sidebars are collected into one [`NavErrors`].
pub fn build_sidebars(raw: &RawSidebars, options: &BuildOptions) -> Result<Sidebars, NavErrors> {
    let mut trees = BTreeMap::new();
    let mut errors = Vec::new();

    for (id, items) in raw {
        match build(id, items, options) {
            Ok(tree) => {
                trees.insert(id.clone(), tree);
            }
            Err(err) => errors.extend(err),
        }
    }

    if !errors.is_empty() {
        return Err(NavErrors(errors));
    }

    tracing::info!(sidebars = trees.len(), "Built navigation");
    Ok(Sidebars::new(trees))
}

struct TreeBuilder<'a> {
    options: &'a BuildOptions,
    errors: Vec<NavError>,
}

impl<'a> TreeBuilder<'a> {
    fn new(options: &'a BuildOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
        }
    }

    /// Build a sequence of sibling entries.
    ///
    /// `depth` is the category nesting depth a category at this level would
    /// have. `ancestors` holds the links of enclosing categories.
    fn entries(
        &mut self,
        items: &[RawItem],
        location: &str,
        depth: usize,
        ancestors: &mut Vec<DocumentId>,
    ) -> Vec<NavEntry> {
        items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| {
                self.entry(item, &format!("{location}[{idx}]"), depth, ancestors)
            })
            .collect()
    }

    fn entry(
        &mut self,
        item: &RawItem,
        location: &str,
        depth: usize,
        ancestors: &mut Vec<DocumentId>,
    ) -> Option<NavEntry> {
        match item {
            RawItem::Shorthand(id) => {
                let id = self.document_id(id, location)?;
                Some(NavEntry::Leaf { id, label: None })
            }
            RawItem::Record(record) => match record.kind.as_deref() {
                Some("doc") => self.doc(record, location),
                Some("category") => self.category(record, location, depth, ancestors),
                Some("link") => self.link(record, location),
                Some(other) => {
                    self.fail(location, InvalidReason::UnknownType(other.to_owned()));
                    None
                }
                None => {
                    self.fail(location, InvalidReason::MissingField("type"));
                    None
                }
            },
            RawItem::Other(value) => {
                self.fail(location, unsupported(value));
                None
            }
        }
    }

    fn doc(&mut self, record: &RawRecord, location: &str) -> Option<NavEntry> {
        let label = match record.label.as_deref() {
            Some(label) if label.trim().is_empty() => {
                self.fail(location, InvalidReason::MissingLabel);
                return None;
            }
            label => label.map(str::to_owned),
        };
        let Some(id) = record.id.as_deref() else {
            self.fail(location, InvalidReason::MissingField("id"));
            return None;
        };
        let id = self.document_id(id, location)?;
        Some(NavEntry::Leaf { id, label })
    }

    fn category(
        &mut self,
        record: &RawRecord,
        location: &str,
        depth: usize,
        ancestors: &mut Vec<DocumentId>,
    ) -> Option<NavEntry> {
        if depth > self.options.max_depth {
            self.fail(
                location,
                InvalidReason::TooDeep {
                    max: self.options.max_depth,
                },
            );
            return None;
        }

        let label = self.label(record, location);
        let link = record
            .link
            .as_ref()
            .and_then(|link| self.category_link(link, location));

        if let Some(link) = &link
            && ancestors.contains(link)
        {
            self.fail(location, InvalidReason::CyclicLink(link.clone()));
            return None;
        }

        let raw_items = record.items.as_deref().unwrap_or_default();
        if raw_items.is_empty() && record.link.is_none() {
            self.fail(
                location,
                InvalidReason::EmptyCategory(label.clone().unwrap_or_default()),
            );
            return None;
        }

        if let Some(link) = &link {
            ancestors.push(link.clone());
        }
        let items = self.entries(raw_items, &format!("{location}.items"), depth + 1, ancestors);
        if link.is_some() {
            ancestors.pop();
        }

        Some(NavEntry::Category {
            label: label?,
            link,
            items,
            collapsed: record.collapsed,
        })
    }

    fn link(&mut self, record: &RawRecord, location: &str) -> Option<NavEntry> {
        let label = self.label(record, location);
        let href = match record.href.as_deref() {
            Some(href) if href.starts_with("http://") || href.starts_with("https://") => {
                Some(href.to_owned())
            }
            Some(href) => {
                self.fail(location, InvalidReason::MalformedHref(href.to_owned()));
                None
            }
            None => {
                self.fail(location, InvalidReason::MissingField("href"));
                None
            }
        };
        Some(NavEntry::Link {
            label: label?,
            href: href?,
        })
    }

    fn category_link(&mut self, link: &RawLink, location: &str) -> Option<DocumentId> {
        let location = format!("{location}.link");
        match link {
            RawLink::Id(id) => self.document_id(id, &location),
            RawLink::Record { kind, id } => match (kind.as_deref(), id.as_deref()) {
                (Some("doc") | None, Some(id)) => self.document_id(id, &location),
                (Some("doc") | None, None) => {
                    self.fail(&location, InvalidReason::MissingField("id"));
                    None
                }
                (Some(other), _) => {
                    self.fail(&location, InvalidReason::UnknownType(other.to_owned()));
                    None
                }
            },
        }
    }

    fn label(&mut self, record: &RawRecord, location: &str) -> Option<String> {
        match record.label.as_deref() {
            Some(label) if !label.trim().is_empty() => Some(label.to_owned()),
            _ => {
                self.fail(location, InvalidReason::MissingLabel);
                None
            }
        }
    }

    fn document_id(&mut self, id: &str, location: &str) -> Option<DocumentId> {
        match DocumentId::parse(id) {
            Ok(id) => Some(id),
            Err(err) => {
                self.fail(location, err.into());
                None
            }
        }
    }

    fn fail(&mut self, location: &str, reason: InvalidReason) {
        tracing::debug!(location, %reason, "Invalid sidebar entry");
        self.errors.push(NavError::invalid(location, reason));
    }
}

/// Reason for rejecting an item that is neither a string nor a record.
fn unsupported(value: &serde_yaml::Value) -> InvalidReason {
    use serde_yaml::Value;

    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => return InvalidReason::Parse("malformed entry record".to_owned()),
        Value::Tagged(_) => "tagged value",
    };
    InvalidReason::UnknownType(kind.to_owned())
}

/// Log leaves that appear more than once in a tree.
fn warn_duplicates(sidebar: &str, entries: &[NavEntry]) {
    fn walk<'e>(entries: &'e [NavEntry], seen: &mut HashSet<&'e str>, sidebar: &str) {
        for entry in entries {
            match entry {
                NavEntry::Leaf { id, .. } => {
                    if !seen.insert(id.as_str()) {
                        tracing::warn!(sidebar, id = %id, "Document appears more than once in sidebar");
                    }
                }
                NavEntry::Category { items, .. } => walk(items, seen, sidebar),
                NavEntry::Link { .. } => {}
            }
        }
    }

    walk(entries, &mut HashSet::new(), sidebar);
}
