//! Sidebar navigation trees for documentation sites.
//!
//! This crate provides:
//! - [`NavNode`] and [`SidebarCollection`]: the sidebar data model
//! - [`validate`]: structural checks with node-path diagnostics
//! - Depth-first flattening and previous/next links ([`Sidebar::flatten`],
//!   [`Sidebar::page_links`])
//! - [`default_sidebars`]: the built-in declaration
//! - JSON/YAML/TOML loading and JSON/YAML export
//!
//! # Quick Start
//!
//! ```
//! use navtree_sidebar::{TUTORIAL_SIDEBAR, default_sidebars, to_json, validate};
//!
//! let sidebars = default_sidebars();
//! assert!(validate(sidebars).is_clean());
//!
//! let docs = sidebars.get(TUTORIAL_SIDEBAR).unwrap().doc_ids();
//! assert_eq!(docs[0], "intro");
//!
//! let json = to_json(sidebars).unwrap();
//! assert!(json.contains("\"tutorialSidebar\""));
//! ```

mod builtin;
mod collection;
mod error;
mod format;
mod navigation;
mod node;
mod path;
mod validate;

pub use builtin::{TUTORIAL_SIDEBAR, default_sidebars, tutorial_sidebars};
pub use collection::{Sidebar, SidebarCollection};
pub use error::SidebarError;
pub use format::{
    ExportFormat, from_json_str, from_toml_str, from_yaml_str, load_from_file, to_json, to_yaml,
    write_to,
};
pub use navigation::PageLinks;
pub use node::{Category, DocRef, NavNode};
pub use path::NodePath;
pub use validate::{Diagnostic, DiagnosticKind, Severity, ValidationReport, validate};
