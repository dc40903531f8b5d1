//! `navtree flatten` command implementation.

use clap::Args;
use navtree_config::{CliSettings, Config};
use navtree_sidebar::{Sidebar, SidebarCollection};

use super::{SourceArgs, load_sidebars};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the flatten command.
#[derive(Args)]
pub(crate) struct FlattenArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Sidebar to flatten (default: all, in declaration order).
    sidebar: Option<String>,

    /// Show previous and next document for each entry.
    #[arg(long)]
    links: bool,
}

impl FlattenArgs {
    /// Execute the flatten command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source: self.source.source,
            ..CliSettings::default()
        };
        let config = Config::load(self.source.config.as_deref(), Some(&cli_settings))?;
        let sidebars = load_sidebars(&config)?;

        for sidebar in select(&sidebars, self.sidebar.as_deref())? {
            output.highlight(sidebar.name());
            for line in render_lines(sidebar, self.links) {
                output.result(&line);
            }
        }
        Ok(())
    }
}

/// Pick one sidebar by name, or all of them.
fn select<'a>(
    sidebars: &'a SidebarCollection,
    name: Option<&str>,
) -> Result<Vec<&'a Sidebar>, CliError> {
    match name {
        Some(name) => sidebars
            .get(name)
            .map(|sidebar| vec![sidebar])
            .ok_or_else(|| CliError::UnknownSidebar(name.to_owned())),
        None => Ok(sidebars.iter().collect()),
    }
}

/// Format the reading order of a sidebar, one document per line.
fn render_lines(sidebar: &Sidebar, links: bool) -> Vec<String> {
    let docs = sidebar.flatten();
    if !links {
        return docs.iter().map(|doc| doc.id.clone()).collect();
    }

    docs.iter()
        .enumerate()
        .map(|(i, doc)| {
            let previous = i.checked_sub(1).map_or("-", |p| docs[p].id.as_str());
            let next = docs.get(i + 1).map_or("-", |d| d.id.as_str());
            format!("{previous} <- {} -> {next}", doc.id)
        })
        .collect()
}
