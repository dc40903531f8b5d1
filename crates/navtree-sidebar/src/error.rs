//! Sidebar error types.

use std::path::PathBuf;

use crate::validate::ValidationReport;

/// Error loading, validating or exporting sidebars.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parse or serialize error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parse or serialize error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// File extension does not map to a known format.
    #[error("Unsupported sidebar file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Format name not recognized.
    #[error("Unknown format: {0} (expected json or yaml)")]
    UnknownFormat(String),
    /// Sidebar name already used in the collection.
    #[error("Duplicate sidebar name: {0}")]
    DuplicateSidebar(String),
    /// Validation produced errors (or warnings in strict mode).
    #[error("Sidebar validation failed:\n{0}")]
    Invalid(ValidationReport),
}
