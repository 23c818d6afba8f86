//! Document discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

use portal_nav::DocumentId;

use crate::front_matter::{FrontMatter, parse_front_matter};
use crate::index::{ContentIndex, Document};

/// Document file extensions.
const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Discovers documents by walking a docs source directory.
///
/// Hidden files and directories are skipped. Entries are visited in name
/// order so that id collisions resolve the same way on every run.
pub struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    /// Create a new Scanner rooted at `source_dir`.
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the source directory.
    ///
    /// Returns an empty index if the source directory doesn't exist.
    pub fn scan(&self) -> ContentIndex {
        let mut index = ContentIndex::new();
        if self.source_dir.is_dir() {
            self.scan_directory(&self.source_dir, "", &mut index);
        } else {
            tracing::warn!(path = %self.source_dir.display(), "Docs source directory not found");
        }
        tracing::info!(documents = index.len(), "Scanned docs");
        index
    }

    fn scan_directory(&self, dir_path: &Path, id_prefix: &str, index: &mut ContentIndex) {
        let Ok(entries) = fs::read_dir(dir_path) else {
            tracing::warn!(path = %dir_path.display(), "Failed to read directory");
            return;
        };

        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                (e.file_name().to_string_lossy().into_owned(), e.path(), is_dir)
            })
            .filter(|(name, _, _)| !name.starts_with('.'))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, path, is_dir) in entries {
            if is_dir {
                self.scan_directory(&path, &join_id(id_prefix, &name), index);
            } else if let Some(stem) = document_stem(&name) {
                self.add_document(&path, id_prefix, stem, index);
            }
        }
    }

    fn add_document(&self, path: &Path, id_prefix: &str, stem: &str, index: &mut ContentIndex) {
        let source = path
            .strip_prefix(&self.source_dir)
            .unwrap_or(path)
            .to_path_buf();

        let front_matter = match fs::read_to_string(path).map(|content| parse_front_matter(&content)) {
            Ok(Ok(front_matter)) => front_matter.unwrap_or_default(),
            Ok(Err(err)) => {
                tracing::warn!(path = %source.display(), error = %err, "Ignoring malformed front matter");
                FrontMatter::default()
            }
            Err(err) => {
                tracing::warn!(path = %source.display(), error = %err, "Failed to read document");
                FrontMatter::default()
            }
        };

        let last_segment = front_matter.id.as_deref().unwrap_or(stem);
        let id = match DocumentId::parse(join_id(id_prefix, last_segment)) {
            Ok(id) => id,
            Err(err) if front_matter.id.is_some() => {
                tracing::warn!(path = %source.display(), error = %err, "Ignoring front matter id");
                match DocumentId::parse(join_id(id_prefix, stem)) {
                    Ok(id) => id,
                    Err(err) => {
                        tracing::warn!(path = %source.display(), error = %err, "Skipping document");
                        return;
                    }
                }
            }
            Err(err) => {
                tracing::warn!(path = %source.display(), error = %err, "Skipping document");
                return;
            }
        };

        let document = Document {
            id,
            title: front_matter.title,
            description: front_matter.description,
            source,
        };
        let id = document.id.clone();
        if !index.insert(document) {
            tracing::warn!(id = %id, "Duplicate document id, keeping first");
        }
    }
}

/// File stem of a document file, or `None` for non-document files.
fn document_stem(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    (EXTENSIONS.contains(&ext) && !stem.is_empty()).then_some(stem)
}

/// Join an id prefix and a segment with `/`.
fn join_id(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}
