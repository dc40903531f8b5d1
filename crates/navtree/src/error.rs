//! CLI error types.

use navtree_config::ConfigError;
use navtree_sidebar::SidebarError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Sidebar(#[from] SidebarError),

    #[error("Unknown sidebar: {0}")]
    UnknownSidebar(String),
}
