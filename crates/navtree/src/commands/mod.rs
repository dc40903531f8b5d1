//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod flatten;

use std::borrow::Cow;
use std::path::PathBuf;

use clap::Args;
use navtree_config::Config;
use navtree_sidebar::{SidebarCollection, ValidationReport, default_sidebars, load_from_file};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use flatten::FlattenArgs;

/// Arguments selecting the configuration and sidebar source.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover navtree.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sidebar declaration file (overrides config; default: built-in sidebars).
    #[arg(short, long)]
    pub source: Option<PathBuf>,
}

/// Load sidebars from the configured source, or the built-in declaration.
pub(crate) fn load_sidebars(config: &Config) -> Result<Cow<'static, SidebarCollection>, CliError> {
    if let Some(path) = &config.sidebars_resolved.source {
        tracing::info!(path = %path.display(), "Loading sidebars");
        Ok(Cow::Owned(load_from_file(path)?))
    } else {
        tracing::info!("Using built-in sidebars");
        Ok(Cow::Borrowed(default_sidebars()))
    }
}

/// Print warnings from a report that passed validation.
pub(crate) fn print_warnings(output: &Output, report: &ValidationReport) {
    for warning in report.warnings() {
        tracing::warn!(path = %warning.path, "{}", warning.kind);
        output.warning(&warning.to_string());
    }
}

/// Count documents across all sidebars.
pub(crate) fn count_docs(sidebars: &SidebarCollection) -> usize {
    sidebars.iter().map(|sidebar| sidebar.flatten().len()).sum()
}
