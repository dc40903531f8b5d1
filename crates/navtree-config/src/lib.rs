//! Configuration management for navtree.
//!
//! Parses `navtree.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `sidebars.source`
//! - `export.path`

mod expand;

use std::path::{Path, PathBuf};

use navtree_sidebar::ExportFormat;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override sidebar source file.
    pub source: Option<PathBuf>,
    /// Override export file path.
    pub output: Option<PathBuf>,
    /// Override export format.
    pub format: Option<ExportFormat>,
    /// Override strict validation flag.
    pub strict: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navtree.toml";

/// Default export filename inside the project directory.
const DEFAULT_EXPORT_FILENAME: &str = "sidebars.json";

/// Sidebar source extensions accepted by the loader.
const SOURCE_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "toml"];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sidebar source configuration (paths are relative strings from TOML).
    sidebars: SidebarsConfigRaw,
    /// Export configuration (paths are relative strings from TOML).
    export: ExportConfigRaw,
    /// Validation configuration.
    pub validation: ValidationConfig,

    /// Resolved sidebar source configuration (set after loading).
    #[serde(skip)]
    pub sidebars_resolved: SidebarsConfig,
    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw sidebar source configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SidebarsConfigRaw {
    source: Option<String>,
}

/// Resolved sidebar source configuration.
#[derive(Debug, Default)]
pub struct SidebarsConfig {
    /// Sidebar declaration file. `None` selects the built-in sidebars.
    pub source: Option<PathBuf>,
}

/// Raw export configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    path: Option<String>,
    format: Option<ExportFormat>,
}

/// Resolved export configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ExportConfig {
    /// Export file path.
    pub path: PathBuf,
    /// Explicit format. `None` infers it from the path extension.
    pub format: Option<ExportFormat>,
}

/// Validation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Treat warnings as failures.
    pub strict: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`export.path`").
        field: String,
        /// Error message.
        message: String,
    },
}

/// Require a path field to be non-empty.
fn require_non_empty(path: &Path, field: &str) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navtree.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated after the overrides.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source {
            self.sidebars_resolved.source = Some(source.clone());
        }
        if let Some(output) = &settings.output {
            self.export_resolved.path.clone_from(output);
        }
        if let Some(format) = settings.format {
            self.export_resolved.format = Some(format);
        }
        if let Some(strict) = settings.strict {
            self.validation.strict = strict;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            sidebars: SidebarsConfigRaw::default(),
            export: ExportConfigRaw::default(),
            validation: ValidationConfig::default(),
            sidebars_resolved: SidebarsConfig::default(),
            export_resolved: ExportConfig {
                path: Self::default_export_path(base),
                format: None,
            },
            config_path: None,
        }
    }

    fn default_export_path(base: &Path) -> PathBuf {
        base.join(".navtree").join(DEFAULT_EXPORT_FILENAME)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_sidebars()?;
        self.validate_export()?;
        Ok(())
    }

    /// Validate sidebar source configuration.
    fn validate_sidebars(&self) -> Result<(), ConfigError> {
        let Some(source) = &self.sidebars_resolved.source else {
            return Ok(());
        };
        require_non_empty(source, "sidebars.source")?;

        let supported = source
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e));
        if !supported {
            return Err(ConfigError::Validation(format!(
                "sidebars.source must be a .json, .yaml, .yml or .toml file: {}",
                source.display()
            )));
        }
        Ok(())
    }

    /// Validate export configuration.
    fn validate_export(&self) -> Result<(), ConfigError> {
        let export = &self.export_resolved;
        require_non_empty(&export.path, "export.path")?;

        if export.format.is_none() && ExportFormat::from_path(&export.path).is_none() {
            return Err(ConfigError::Validation(format!(
                "export.format is required when export.path has no .json or .yaml extension: {}",
                export.path.display()
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source) = self.sidebars.source {
            self.sidebars.source = Some(expand::expand_env(source, "sidebars.source")?);
        }
        if let Some(ref path) = self.export.path {
            self.export.path = Some(expand::expand_env(path, "export.path")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.sidebars_resolved = SidebarsConfig {
            source: self.sidebars.source.as_deref().map(|s| config_dir.join(s)),
        };

        self.export_resolved = ExportConfig {
            path: self.export.path.as_deref().map_or_else(
                || Self::default_export_path(config_dir),
                |p| config_dir.join(p),
            ),
            format: self.export.format,
        };
    }
}
