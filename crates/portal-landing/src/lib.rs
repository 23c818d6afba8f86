//! Landing page composition for Portal.
//!
//! Turns curated selections of documents into presentation-ready
//! [`DisplayRecord`] values (title, target, href, description) that a page
//! renderer lays out as cards or pills.
//!
//! # Example
//!
//! ```
//! use portal_landing::{Composer, Routes};
//! use portal_nav::{BuildOptions, DocumentId, RawItem, build};
//! use std::collections::BTreeMap;
//!
//! let tree = build(
//!     "docsSidebar",
//!     &[RawItem::linked_category("Console", "console/index", vec![RawItem::doc("console/rbac")])],
//!     &BuildOptions::default(),
//! )
//! .unwrap();
//!
//! let composer = Composer::new(&tree, Routes::default());
//! let selection = [DocumentId::parse("console/index").unwrap()];
//! let records = composer.curate(&selection, &BTreeMap::new()).unwrap();
//!
//! assert_eq!(records[0].title, "Console");
//! assert_eq!(records[0].href, "/console/");
//! ```

mod composer;
mod routes;
mod section;

pub use composer::{ComposedSection, Composer, DisplayRecord, DocumentMeta};
pub use routes::Routes;
pub use section::{LandingItem, LandingSection, SectionStyle};
