//! Index of discovered documents.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use portal_nav::DocumentId;

/// A discovered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Document id.
    pub id: DocumentId,
    /// Title from front matter.
    pub title: Option<String>,
    /// Description from front matter.
    pub description: Option<String>,
    /// Source file, relative to the docs directory.
    pub source: PathBuf,
}

/// Known documents, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentIndex {
    documents: BTreeMap<DocumentId, Document>,
}

impl ContentIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document.
    ///
    /// Returns `false` and keeps the existing entry if the id is taken.
    pub fn insert(&mut self, document: Document) -> bool {
        if self.documents.contains_key(&document.id) {
            return false;
        }
        self.documents.insert(document.id.clone(), document);
        true
    }

    /// Set of known document ids.
    #[must_use]
    pub fn ids(&self) -> BTreeSet<DocumentId> {
        self.documents.keys().cloned().collect()
    }

    /// Look up a document.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Front matter title of a document.
    #[must_use]
    pub fn title(&self, id: &str) -> Option<&str> {
        self.get(id)?.title.as_deref()
    }

    /// Front matter description of a document.
    #[must_use]
    pub fn description(&self, id: &str) -> Option<&str> {
        self.get(id)?.description.as_deref()
    }

    /// Documents in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if no documents are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for ContentIndex {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut index = Self::new();
        for document in iter {
            index.insert(document);
        }
        index
    }
}
