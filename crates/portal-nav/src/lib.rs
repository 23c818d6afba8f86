//! Navigation tree model for Portal.
//!
//! Turns user-authored sidebar specifications into validated, immutable
//! navigation trees that a renderer walks to build sidebars and cross-links.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::BTreeSet;
//! use portal_nav::{BuildOptions, DocumentId, build, parse_sidebars, validate_references};
//!
//! let raw = parse_sidebars(r#"
//! docsSidebar:
//!   - intro
//!   - type: category
//!     label: Tools
//!     items: [tools/a, tools/b]
//! "#).unwrap();
//!
//! let tree = build("docsSidebar", &raw["docsSidebar"], &BuildOptions::default()).unwrap();
//! assert_eq!(tree.entries().len(), 2);
//!
//! let known: BTreeSet<DocumentId> = ["intro", "tools/a", "tools/b"]
//!     .into_iter()
//!     .map(|id| DocumentId::parse(id).unwrap())
//!     .collect();
//! assert!(validate_references(&tree, &known).is_empty());
//! ```
//!
//! # Architecture
//!
//! - [`RawItem`]: duck-typed authoring form (strings or records)
//! - [`build`] / [`build_sidebars`]: normalization into [`NavTree`] / [`Sidebars`]
//! - [`NavEntry`]: tagged entry variant resolved once during normalization
//! - [`validate_references`]: cross-check against known document ids

mod builder;
mod entry;
mod error;
mod id;
mod raw;
mod validate;

pub use builder::{BuildOptions, DEFAULT_MAX_DEPTH, build, build_sidebars};
pub use entry::{Entries, NavEntry, NavTree, Sidebars};
pub use error::{InvalidReason, NavError, NavErrors};
pub use id::{DocumentId, MalformedId};
pub use raw::{RawItem, RawLink, RawRecord, RawSidebars, parse_sidebars};
pub use validate::validate_references;
