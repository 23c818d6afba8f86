//! Normalized navigation tree.
//!
//! Trees are built once from a sidebar specification and never mutated.
//! A changed specification produces a new tree.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::id::DocumentId;
use crate::raw::{RawItem, RawLink, RawRecord};

/// Navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavEntry {
    /// Single document reference.
    #[serde(rename = "doc")]
    Leaf {
        /// Referenced document.
        id: DocumentId,
        /// Label overriding the document title.
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// Named group of entries, optionally with its own landing document.
    Category {
        /// Display label.
        label: String,
        /// Landing document of the category.
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<DocumentId>,
        /// Children in display order.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        items: Vec<NavEntry>,
        /// Initial collapsed state.
        #[serde(skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
    },
    /// External URL.
    Link {
        /// Display label.
        label: String,
        /// Absolute http(s) URL.
        href: String,
    },
}

impl NavEntry {
    /// Document this entry resolves to, if any.
    ///
    /// Leaves resolve to their id, categories to their link.
    #[must_use]
    pub fn target(&self) -> Option<&DocumentId> {
        match self {
            Self::Leaf { id, .. } => Some(id),
            Self::Category { link, .. } => link.as_ref(),
            Self::Link { .. } => None,
        }
    }

    /// Child entries (empty for leaves and links).
    #[must_use]
    pub fn children(&self) -> &[NavEntry] {
        match self {
            Self::Category { items, .. } => items,
            Self::Leaf { .. } | Self::Link { .. } => &[],
        }
    }

    /// Canonical raw form of this entry.
    #[must_use]
    pub fn to_raw(&self) -> RawItem {
        match self {
            Self::Leaf { id, label: None } => RawItem::Shorthand(id.as_str().to_owned()),
            Self::Leaf {
                id,
                label: Some(label),
            } => RawItem::Record(RawRecord {
                kind: Some("doc".to_owned()),
                id: Some(id.as_str().to_owned()),
                label: Some(label.clone()),
                ..RawRecord::default()
            }),
            Self::Category {
                label,
                link,
                items,
                collapsed,
            } => RawItem::Record(RawRecord {
                kind: Some("category".to_owned()),
                label: Some(label.clone()),
                link: link.as_ref().map(|id| RawLink::doc(id.as_str())),
                items: Some(items.iter().map(Self::to_raw).collect()),
                collapsed: *collapsed,
                ..RawRecord::default()
            }),
            Self::Link { label, href } => RawItem::link(label.as_str(), href.as_str()),
        }
    }
}

/// Navigation tree of one sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavTree {
    id: String,
    entries: Vec<NavEntry>,
}

impl NavTree {
    pub(crate) fn new(id: String, entries: Vec<NavEntry>) -> Self {
        Self { id, entries }
    }

    /// Sidebar identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-level entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Depth-first, pre-order walk yielding `(depth, entry)`.
    ///
    /// Top-level entries have depth 1.
    pub fn iter(&self) -> Entries<'_> {
        Entries {
            stack: self.entries.iter().rev().map(|e| (1, e)).collect(),
        }
    }

    /// Every referenced document id, in walk order.
    ///
    /// Includes leaf ids and category links. May contain duplicates.
    pub fn document_ids(&self) -> impl Iterator<Item = &DocumentId> {
        self.iter().filter_map(|(_, entry)| entry.target())
    }

    /// True if any leaf or category link references `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.document_ids().any(|doc| doc.as_str() == id)
    }

    /// Display title the tree assigns to a document.
    ///
    /// An explicit leaf label wins over the label of a category linking to
    /// the document. Returns `None` if the tree assigns no title.
    #[must_use]
    pub fn title_for(&self, id: &str) -> Option<&str> {
        let leaf_label = self.iter().find_map(|(_, entry)| match entry {
            NavEntry::Leaf {
                id: leaf,
                label: Some(label),
            } if leaf.as_str() == id => Some(label.as_str()),
            _ => None,
        });
        leaf_label.or_else(|| {
            self.iter().find_map(|(_, entry)| match entry {
                NavEntry::Category {
                    label,
                    link: Some(link),
                    ..
                } if link.as_str() == id => Some(label.as_str()),
                _ => None,
            })
        })
    }

    /// Canonical raw form of the tree.
    ///
    /// Building the result again yields an identical tree.
    #[must_use]
    pub fn to_raw(&self) -> Vec<RawItem> {
        self.entries.iter().map(NavEntry::to_raw).collect()
    }
}

impl<'a> IntoIterator for &'a NavTree {
    type Item = (usize, &'a NavEntry);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a [`NavTree`].
pub struct Entries<'a> {
    stack: Vec<(usize, &'a NavEntry)>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (usize, &'a NavEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, entry) = self.stack.pop()?;
        self.stack
            .extend(entry.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, entry))
    }
}

/// All navigation trees of a site, keyed by sidebar id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebars {
    trees: BTreeMap<String, NavTree>,
}

impl Sidebars {
    pub(crate) fn new(trees: BTreeMap<String, NavTree>) -> Self {
        Self { trees }
    }

    /// Tree for a sidebar id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NavTree> {
        self.trees.get(id)
    }

    /// Trees in sidebar id order.
    pub fn iter(&self) -> impl Iterator<Item = &NavTree> {
        self.trees.values()
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// True if there are no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(s: &str) -> DocumentId {
        DocumentId::parse(s).unwrap()
    }

    fn leaf(s: &str) -> NavEntry {
        NavEntry::Leaf {
            id: id(s),
            label: None,
        }
    }

    fn sample_tree() -> NavTree {
        NavTree::new(
            "docsSidebar".to_owned(),
            vec![
                leaf("intro"),
                NavEntry::Category {
                    label: "Tools".to_owned(),
                    link: Some(id("tools/evaluation")),
                    items: vec![
                        leaf("tools/evaluation"),
                        NavEntry::Leaf {
                            id: id("tools/s3-utils"),
                            label: Some("S3".to_owned()),
                        },
                    ],
                    collapsed: None,
                },
                NavEntry::Link {
                    label: "GitHub".to_owned(),
                    href: "https://github.com/org/repo".to_owned(),
                },
            ],
        )
    }

    #[test]
    fn test_iter_is_pre_order_with_depth() {
        let tree = sample_tree();

        let walked: Vec<_> = tree
            .iter()
            .map(|(depth, entry)| match entry {
                NavEntry::Leaf { id, .. } => (depth, id.as_str().to_owned()),
                NavEntry::Category { label, .. } | NavEntry::Link { label, .. } => {
                    (depth, label.clone())
                }
            })
            .collect();

        assert_eq!(
            walked,
            vec![
                (1, "intro".to_owned()),
                (1, "Tools".to_owned()),
                (2, "tools/evaluation".to_owned()),
                (2, "tools/s3-utils".to_owned()),
                (1, "GitHub".to_owned()),
            ]
        );
    }

    #[test]
    fn test_document_ids_include_category_links() {
        let tree = sample_tree();

        let ids: Vec<_> = tree.document_ids().map(DocumentId::as_str).collect();

        assert_eq!(
            ids,
            vec!["intro", "tools/evaluation", "tools/evaluation", "tools/s3-utils"]
        );
    }

    #[test]
    fn test_contains() {
        let tree = sample_tree();
        assert!(tree.contains("tools/s3-utils"));
        assert!(!tree.contains("tools/missing"));
    }

    #[test]
    fn test_title_for_prefers_leaf_label() {
        let tree = sample_tree();
        assert_eq!(tree.title_for("tools/s3-utils"), Some("S3"));
        assert_eq!(tree.title_for("tools/evaluation"), Some("Tools"));
        assert_eq!(tree.title_for("intro"), None);
    }

    #[test]
    fn test_to_raw_canonical_form() {
        let raw = sample_tree().to_raw();

        assert_eq!(raw[0], RawItem::doc("intro"));
        let RawItem::Record(category) = &raw[1] else {
            panic!("expected record");
        };
        assert_eq!(category.link, Some(RawLink::doc("tools/evaluation")));
        assert_eq!(category.items.as_ref().map(Vec::len), Some(2));
        assert_eq!(raw[2], RawItem::link("GitHub", "https://github.com/org/repo"));
    }

    #[test]
    fn test_serialize_entry_tags() {
        let json = serde_json::to_value(sample_tree()).unwrap();

        assert_eq!(json["id"], "docsSidebar");
        assert_eq!(json["entries"][0], serde_json::json!({"type": "doc", "id": "intro"}));
        assert_eq!(json["entries"][1]["type"], "category");
        assert_eq!(json["entries"][1]["link"], "tools/evaluation");
        assert_eq!(json["entries"][1]["items"][1]["label"], "S3");
        assert_eq!(json["entries"][2]["type"], "link");
    }

    #[test]
    fn test_serialize_category_without_items_omits_them() {
        let entry = NavEntry::Category {
            label: "CLI".to_owned(),
            link: Some(id("cli/index")),
            items: Vec::new(),
            collapsed: None,
        };

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"type": "category", "label": "CLI", "link": "cli/index"})
        );
    }
}
