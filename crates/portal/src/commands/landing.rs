//! `portal landing` command implementation.

use std::collections::BTreeMap;

use clap::Args;
use portal_config::CliSettings;
use portal_landing::Composer;
use portal_nav::{DocumentId, build};

use super::CommonArgs;
use super::project::Project;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the landing command.
#[derive(Args)]
pub(crate) struct LandingArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Curate these documents instead of the configured sections.
    #[arg(long, value_delimiter = ',')]
    select: Vec<DocumentId>,
}

impl LandingArgs {
    /// Execute the landing command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the landing sidebar is missing or
    /// invalid, or a selected document isn't in it.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let project = Project::load(&self.common, CliSettings::default())?;

        let sidebar = &project.config.landing.sidebar;
        let items = project
            .sidebars
            .get(sidebar)
            .ok_or_else(|| CliError::UnknownSidebar(sidebar.clone()))?;
        let tree = build(sidebar, items, &project.build_options())?;

        let composer = Composer::new(&tree, project.routes()).with_metadata(project.metadata());

        if self.select.is_empty() {
            let sections = composer.compose_sections(&project.config.landing.sections)?;
            output.json(&sections)
        } else {
            let records = composer.curate(&self.select, &BTreeMap::new())?;
            output.json(&records)
        }
    }
}
