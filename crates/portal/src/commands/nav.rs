//! `portal nav` command implementation.

use clap::Args;
use portal_config::CliSettings;
use portal_nav::build_sidebars;

use super::CommonArgs;
use super::project::Project;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print only this sidebar.
    #[arg(long)]
    sidebar: Option<String>,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, any sidebar is invalid, or the
    /// requested sidebar doesn't exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let project = Project::load(&self.common, CliSettings::default())?;
        let sidebars = build_sidebars(&project.sidebars, &project.build_options())?;

        match self.sidebar {
            Some(id) => {
                let tree = sidebars.get(&id).ok_or(CliError::UnknownSidebar(id))?;
                output.json(tree)
            }
            None => output.json(&sidebars),
        }
    }
}
