//! YAML front matter parsing.
//!
//! Front matter is a YAML block at the very start of a document, delimited by
//! `---` lines.

use serde::Deserialize;

/// Front matter fields relevant to navigation.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct FrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Return the YAML between the opening and closing `---` lines.
///
/// Returns `None` if the content does not start with front matter or the
/// block is never closed.
pub(crate) fn split_front_matter(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse front matter from document content.
///
/// Returns `Ok(None)` when there is no front matter block.
pub(crate) fn parse_front_matter(content: &str) -> Result<Option<FrontMatter>, serde_yaml::Error> {
    let Some(yaml) = split_front_matter(content) else {
        return Ok(None);
    };
    if yaml.trim().is_empty() {
        return Ok(Some(FrontMatter::default()));
    }
    serde_yaml::from_str(yaml).map(Some)
}
