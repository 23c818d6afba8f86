//! `portal check` command implementation.

use clap::{Args, ValueEnum};
use portal_config::{BrokenLinks, CliSettings};
use portal_landing::Composer;
use portal_nav::{NavError, build, validate_references};

use super::CommonArgs;
use super::project::Project;
use crate::error::CliError;
use crate::output::Output;

/// Broken link policy as accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum BrokenLinksArg {
    Error,
    Warn,
    Ignore,
}

impl From<BrokenLinksArg> for BrokenLinks {
    fn from(arg: BrokenLinksArg) -> Self {
        match arg {
            BrokenLinksArg::Error => Self::Error,
            BrokenLinksArg::Warn => Self::Warn,
            BrokenLinksArg::Ignore => Self::Ignore,
        }
    }
}

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// What to do with references to missing documents (overrides config).
    #[arg(long, value_enum)]
    on_broken_links: Option<BrokenLinksArg>,

    /// Maximum category nesting depth (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,
}

/// Outcome of checking a project.
#[derive(Debug, Default)]
struct Report {
    /// Sidebars built successfully.
    trees: usize,
    /// Problems that always fail the check.
    errors: Vec<NavError>,
    /// Sidebar references to missing documents, subject to the broken link policy.
    broken: Vec<NavError>,
}

impl Report {
    fn failures(&self, policy: BrokenLinks) -> usize {
        match policy {
            BrokenLinks::Error => self.errors.len() + self.broken.len(),
            BrokenLinks::Warn | BrokenLinks::Ignore => self.errors.len(),
        }
    }
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the project has violations.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            max_depth: self.max_depth,
            on_broken_links: self.on_broken_links.map(BrokenLinks::from),
            ..CliSettings::default()
        };
        let project = Project::load(&self.common, settings)?;

        output.highlight("Checking navigation");
        output.info(&format!(
            "Sidebars: {}",
            project.config.docs_resolved.sidebars_path.display()
        ));
        output.info(&format!(
            "Source directory: {}",
            project.config.docs_resolved.source_dir.display()
        ));

        let policy = project.config.navigation.on_broken_links;
        let report = check(&project)?;

        for err in &report.errors {
            output.error(&err.to_string());
        }
        for err in &report.broken {
            if policy == BrokenLinks::Error {
                output.error(&err.to_string());
            } else {
                output.warning(&err.to_string());
            }
        }
        if policy == BrokenLinks::Ignore {
            output.info("Reference validation: skipped");
        }

        let failures = report.failures(policy);
        if failures > 0 {
            return Err(CliError::Check(failures));
        }

        output.success(&format!(
            "Checked {} sidebar(s) against {} document(s)",
            report.trees,
            project.content.len()
        ));
        Ok(())
    }
}

/// Build every sidebar, validate references, and compose landing sections.
///
/// Sidebars are built independently so one broken sidebar doesn't hide
/// problems in the others.
fn check(project: &Project) -> Result<Report, CliError> {
    let options = project.build_options();
    let mut report = Report::default();
    let mut trees = Vec::with_capacity(project.sidebars.len());

    for (id, items) in &project.sidebars {
        match build(id, items, &options) {
            Ok(tree) => trees.push(tree),
            Err(errors) => report.errors.extend(errors),
        }
    }
    report.trees = trees.len();

    if project.config.navigation.on_broken_links != BrokenLinks::Ignore {
        let known = project.content.ids();
        for tree in &trees {
            report.broken.extend(validate_references(tree, &known));
        }
    }

    let landing = &project.config.landing;
    if !landing.sections.is_empty() {
        if !project.sidebars.contains_key(&landing.sidebar) {
            return Err(CliError::UnknownSidebar(landing.sidebar.clone()));
        }
        // A landing sidebar that failed to build is already reported.
        if let Some(tree) = trees.iter().find(|tree| tree.id() == landing.sidebar) {
            let composer =
                Composer::new(tree, project.routes()).with_metadata(project.metadata());
            if let Err(errors) = composer.compose_sections(&landing.sections) {
                report.errors.extend(errors);
            }
        }
    }

    Ok(report)
}
