//! `navtree export` command implementation.

use std::path::PathBuf;

use clap::Args;
use navtree_config::{CliSettings, Config};
use navtree_sidebar::{ExportFormat, validate, write_to};

use super::{SourceArgs, load_sidebars, print_warnings};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file (default: .navtree/sidebars.json).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: json or yaml (default: from output extension).
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Treat warnings as errors (overrides config).
    #[arg(long)]
    strict: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// Validation runs first; nothing is written if it fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source: self.source.source,
            output: self.output,
            format: self.format,
            strict: self.strict.then_some(true),
        };
        let config = Config::load(self.source.config.as_deref(), Some(&cli_settings))?;

        if let Some(source) = &config.sidebars_resolved.source {
            output.info(&format!("Source: {}", source.display()));
        } else {
            output.info("Source: built-in sidebars");
        }

        let sidebars = load_sidebars(&config)?;
        let report = validate(&sidebars).into_result(config.validation.strict)?;
        print_warnings(&output, &report);

        let path = &config.export_resolved.path;
        let format = write_to(&sidebars, path, config.export_resolved.format)?;

        output.success(&format!(
            "Exported {} sidebar(s) to {} ({format})",
            sidebars.len(),
            path.display()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use navtree_sidebar::{SidebarError, from_yaml_str, load_from_file};
    use pretty_assertions::assert_eq;

    use super::*;

    const EMPTY_CATEGORY_YAML: &str = "\
docs:
  - intro
  - type: category
    label: Later
    items: []
";

    /// Create an empty config file and a sidebar source in `dir`.
    fn write_project(dir: &Path, sidebars: &str) -> (PathBuf, PathBuf) {
        let config = dir.join("navtree.toml");
        std::fs::write(&config, "").unwrap();
        let source = dir.join("sidebars.yaml");
        std::fs::write(&source, sidebars).unwrap();
        (config, source)
    }

    fn export_args(
        config: PathBuf,
        source: PathBuf,
        output: PathBuf,
        strict: bool,
    ) -> ExportArgs {
        ExportArgs {
            source: SourceArgs {
                config: Some(config),
                source: Some(source),
            },
            output: Some(output),
            format: None,
            strict,
        }
    }

    #[test]
    fn test_strict_export_with_warning_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (config, source) = write_project(temp_dir.path(), EMPTY_CATEGORY_YAML);
        let output = temp_dir.path().join("build/sidebars.json");

        let err = export_args(config, source, output.clone(), true)
            .execute()
            .unwrap_err();

        assert!(
            matches!(err, CliError::Sidebar(SidebarError::Invalid(_))),
            "Expected SidebarError::Invalid, got {err:?}"
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_export_with_warning_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (config, source) = write_project(temp_dir.path(), EMPTY_CATEGORY_YAML);
        let output = temp_dir.path().join("build/sidebars.json");

        export_args(config, source.clone(), output.clone(), false)
            .execute()
            .unwrap();

        assert!(output.exists());
        assert_eq!(
            load_from_file(&output).unwrap(),
            load_from_file(&source).unwrap()
        );
    }

    #[test]
    fn test_export_with_error_writes_nothing_even_without_strict() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (config, source) = write_project(temp_dir.path(), "docs:\n  - \"\"\n");
        let output = temp_dir.path().join("sidebars.json");

        let err = export_args(config, source, output.clone(), false)
            .execute()
            .unwrap_err();

        assert!(matches!(err, CliError::Sidebar(SidebarError::Invalid(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_export_format_flag_overrides_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (config, source) = write_project(temp_dir.path(), "docs:\n  - intro\n");
        let output = temp_dir.path().join("sidebars.out");

        let mut args = export_args(config, source, output.clone(), false);
        args.format = Some(ExportFormat::Yaml);
        args.execute().unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("docs:"), "got: {content}");
        assert_eq!(
            from_yaml_str(&content).unwrap().get("docs").unwrap().doc_ids(),
            vec!["intro"]
        );
    }

    #[test]
    fn test_config_strict_applies_without_flag() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (config, source) = write_project(temp_dir.path(), EMPTY_CATEGORY_YAML);
        std::fs::write(&config, "[validation]\nstrict = true\n").unwrap();
        let output = temp_dir.path().join("sidebars.json");

        let result = export_args(config, source, output.clone(), false).execute();

        assert!(result.is_err());
        assert!(!output.exists());
    }
}
