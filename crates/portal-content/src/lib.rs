//! Document discovery for Portal.
//!
//! Finds the documents that exist under a docs source directory so sidebar
//! references can be checked against them. Each `.md` or `.mdx` file is one
//! document; its id is the relative path without extension.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use portal_content::Scanner;
//!
//! let index = Scanner::new(PathBuf::from("docs")).scan();
//! let known = index.ids();
//! ```

mod front_matter;
mod index;
mod scanner;

pub use index::{ContentIndex, Document};
pub use scanner::Scanner;
