//! Route resolution for document links.

use portal_nav::DocumentId;

/// Maps document ids to site-relative hrefs.
///
/// An href is `base_url` + `route_base_path` + the document's url path, with
/// duplicate slashes collapsed. Index documents get a trailing `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Routes {
    base_url: String,
    route_base_path: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self::new("/", "/")
    }
}

impl Routes {
    /// Create routes for a site served under `base_url` with docs mounted at
    /// `route_base_path`.
    pub fn new(base_url: impl Into<String>, route_base_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            route_base_path: route_base_path.into(),
        }
    }

    /// Href of a document.
    #[must_use]
    pub fn href(&self, id: &DocumentId) -> String {
        let segments: Vec<&str> = self
            .base_url
            .split('/')
            .chain(self.route_base_path.split('/'))
            .chain(id.url_path().split('/'))
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            return "/".to_owned();
        }

        let mut href = format!("/{}", segments.join("/"));
        if id.is_index() {
            href.push('/');
        }
        href
    }
}
