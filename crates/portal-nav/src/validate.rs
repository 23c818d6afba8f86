//! Reference validation against known documents.

use std::collections::BTreeSet;

use crate::entry::{NavEntry, NavTree};
use crate::error::NavError;
use crate::id::DocumentId;

/// Cross-check every leaf and category link against known document ids.
///
/// Returns one [`NavError::UnknownTarget`] per dangling reference, in walk
/// order. External links are never checked.
pub fn validate_references(tree: &NavTree, known: &BTreeSet<DocumentId>) -> Vec<NavError> {
    let mut errors = Vec::new();
    check_entries(tree.entries(), tree.id(), known, &mut errors);
    errors
}

fn check_entries(
    entries: &[NavEntry],
    location: &str,
    known: &BTreeSet<DocumentId>,
    errors: &mut Vec<NavError>,
) {
    for (idx, entry) in entries.iter().enumerate() {
        let location = format!("{location}[{idx}]");
        match entry {
            NavEntry::Leaf { id, .. } => check_id(id, &location, known, errors),
            NavEntry::Category { link, items, .. } => {
                if let Some(link) = link {
                    check_id(link, &format!("{location}.link"), known, errors);
                }
                check_entries(items, &format!("{location}.items"), known, errors);
            }
            NavEntry::Link { .. } => {}
        }
    }
}

fn check_id(
    id: &DocumentId,
    location: &str,
    known: &BTreeSet<DocumentId>,
    errors: &mut Vec<NavError>,
) {
    if !known.contains(id) {
        tracing::debug!(location, id = %id, "Dangling document reference");
        errors.push(NavError::unknown(location, id.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BuildOptions, build};
    use crate::raw::RawItem;
    use pretty_assertions::assert_eq;

    fn known(ids: &[&str]) -> BTreeSet<DocumentId> {
        ids.iter().map(|id| DocumentId::parse(*id).unwrap()).collect()
    }

    fn tree(items: &[RawItem]) -> NavTree {
        build("docsSidebar", items, &BuildOptions::default()).unwrap()
    }

    #[test]
    fn test_all_references_known() {
        let tree = tree(&[
            RawItem::doc("intro"),
            RawItem::category("Tools", vec![RawItem::doc("tools/a"), RawItem::doc("tools/b")]),
        ]);

        let errors = validate_references(&tree, &known(&["intro", "tools/a", "tools/b"]));

        assert!(errors.is_empty());
        assert_eq!(tree.entries().len(), 2);
    }

    #[test]
    fn test_missing_leaf_reported_once() {
        let tree = tree(&[
            RawItem::doc("intro"),
            RawItem::category("Tools", vec![RawItem::doc("tools/missing")]),
        ]);

        let errors = validate_references(&tree, &known(&["intro"]));

        assert_eq!(
            errors,
            vec![NavError::UnknownTarget {
                id: DocumentId::parse("tools/missing").unwrap(),
                location: "docsSidebar[1].items[0]".to_owned(),
            }]
        );
    }

    #[test]
    fn test_missing_category_link_reported() {
        let tree = tree(&[RawItem::linked_category(
            "Console",
            "console/index",
            vec![RawItem::doc("console/rbac")],
        )]);

        let errors = validate_references(&tree, &known(&["console/rbac"]));

        assert_eq!(
            errors,
            vec![NavError::UnknownTarget {
                id: DocumentId::parse("console/index").unwrap(),
                location: "docsSidebar[0].link".to_owned(),
            }]
        );
    }

    #[test]
    fn test_reports_every_violation() {
        let tree = tree(&[
            RawItem::doc("a"),
            RawItem::doc("b"),
            RawItem::linked_category("C", "c/index", vec![RawItem::doc("c/d")]),
        ]);

        let errors = validate_references(&tree, &known(&[]));

        let ids: Vec<_> = errors
            .iter()
            .map(|e| match e {
                NavError::UnknownTarget { id, .. } => id.as_str(),
                NavError::InvalidSpec { .. } => panic!("unexpected structural error"),
            })
            .collect();
        assert_eq!(ids, vec!["a", "b", "c/index", "c/d"]);
    }

    #[test]
    fn test_external_links_not_checked() {
        let tree = tree(&[RawItem::link("GitHub", "https://github.com/org/repo")]);

        assert!(validate_references(&tree, &known(&[])).is_empty());
    }
}
