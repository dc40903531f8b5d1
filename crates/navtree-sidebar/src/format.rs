//! Reading and writing sidebar files.
//!
//! Sources may be JSON, YAML or TOML, chosen by file extension. Exports are
//! JSON or YAML in the canonical tagged shape.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::collection::SidebarCollection;
use crate::error::SidebarError;

/// Export file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl ExportFormat {
    /// Infer the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Serialize a collection in this format.
    pub fn render(self, collection: &SidebarCollection) -> Result<String, SidebarError> {
        match self {
            Self::Json => to_json(collection),
            Self::Yaml => to_yaml(collection),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = SidebarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(SidebarError::UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Parse a collection from JSON.
pub fn from_json_str(content: &str) -> Result<SidebarCollection, SidebarError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a collection from YAML.
pub fn from_yaml_str(content: &str) -> Result<SidebarCollection, SidebarError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a collection from TOML.
pub fn from_toml_str(content: &str) -> Result<SidebarCollection, SidebarError> {
    Ok(toml::from_str(content)?)
}

/// Serialize a collection to pretty-printed JSON.
pub fn to_json(collection: &SidebarCollection) -> Result<String, SidebarError> {
    let mut json = serde_json::to_string_pretty(collection)?;
    json.push('\n');
    Ok(json)
}

/// Serialize a collection to YAML.
pub fn to_yaml(collection: &SidebarCollection) -> Result<String, SidebarError> {
    Ok(serde_yaml::to_string(collection)?)
}

/// Load a collection from a file, picking the parser by extension.
///
/// # Errors
///
/// Returns [`SidebarError::UnsupportedFormat`] for unknown extensions, or the
/// I/O or parse error.
pub fn load_from_file(path: &Path) -> Result<SidebarCollection, SidebarError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parse: fn(&str) -> Result<SidebarCollection, SidebarError> = match extension {
        "json" => from_json_str,
        "yaml" | "yml" => from_yaml_str,
        "toml" => from_toml_str,
        _ => return Err(SidebarError::UnsupportedFormat(path.to_path_buf())),
    };

    let content = std::fs::read_to_string(path)?;
    let collection = parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        sidebars = collection.len(),
        "Loaded sidebars"
    );
    Ok(collection)
}

/// Write a collection to a file, creating parent directories.
///
/// If `format` is `None`, it is inferred from the file extension.
///
/// # Errors
///
/// Returns [`SidebarError::UnsupportedFormat`] if no format is given and the
/// extension is unknown, or the I/O or serialization error.
pub fn write_to(
    collection: &SidebarCollection,
    path: &Path,
    format: Option<ExportFormat>,
) -> Result<ExportFormat, SidebarError> {
    let format = format
        .or_else(|| ExportFormat::from_path(path))
        .ok_or_else(|| SidebarError::UnsupportedFormat(path.to_path_buf()))?;

    let content = format.render(collection)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    tracing::debug!(path = %path.display(), %format, "Exported sidebars");
    Ok(format)
}
