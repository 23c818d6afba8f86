//! Loading of everything a command works on.

use std::collections::BTreeMap;
use std::path::Path;

use portal_config::{CliSettings, Config};
use portal_content::{ContentIndex, Scanner};
use portal_landing::{DocumentMeta, Routes};
use portal_nav::{BuildOptions, DocumentId, RawSidebars, parse_sidebars};

use super::CommonArgs;
use crate::error::CliError;

/// Configuration, raw sidebars, and scanned content of a docs project.
pub(crate) struct Project {
    pub config: Config,
    pub sidebars: RawSidebars,
    pub content: ContentIndex,
}

impl Project {
    /// Load config, sidebars, and content.
    ///
    /// `settings` carries command-specific overrides; path overrides from
    /// `common` are filled in here.
    pub(crate) fn load(common: &CommonArgs, settings: CliSettings) -> Result<Self, CliError> {
        let settings = CliSettings {
            source_dir: common.source_dir.clone(),
            sidebars: common.sidebars.clone(),
            ..settings
        };
        let config = Config::load(common.config.as_deref(), Some(&settings))?;
        let sidebars = read_sidebars(&config.docs_resolved.sidebars_path)?;
        let content = Scanner::new(config.docs_resolved.source_dir.clone()).scan();

        Ok(Self {
            config,
            sidebars,
            content,
        })
    }

    /// Tree building options from config.
    pub(crate) fn build_options(&self) -> BuildOptions {
        BuildOptions {
            max_depth: self.config.navigation.max_depth,
        }
    }

    /// Routes for site-relative document links.
    pub(crate) fn routes(&self) -> Routes {
        Routes::new(
            self.config.site.base_url.as_str(),
            self.config.docs_resolved.route_base_path.as_str(),
        )
    }

    /// Front matter metadata of scanned documents.
    pub(crate) fn metadata(&self) -> BTreeMap<DocumentId, DocumentMeta> {
        self.content
            .iter()
            .map(|doc| {
                (
                    doc.id.clone(),
                    DocumentMeta {
                        title: doc.title.clone(),
                        description: doc.description.clone(),
                    },
                )
            })
            .collect()
    }
}

/// Read and parse a sidebars file.
fn read_sidebars(path: &Path) -> Result<RawSidebars, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_sidebars(&content)?)
}
