//! `navtree check` command implementation.

use clap::Args;
use navtree_config::{CliSettings, Config};
use navtree_sidebar::validate;

use super::{SourceArgs, count_docs, load_sidebars, print_warnings};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Treat warnings as errors (overrides config).
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or validation finds errors.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source: self.source.source,
            strict: self.strict.then_some(true),
            ..CliSettings::default()
        };
        let config = Config::load(self.source.config.as_deref(), Some(&cli_settings))?;

        let sidebars = load_sidebars(&config)?;
        let report = validate(&sidebars).into_result(config.validation.strict)?;
        print_warnings(&output, &report);

        let warnings = report.warnings().count();
        output.success(&format!(
            "Checked {} sidebar(s), {} document(s): ok ({warnings} warning(s))",
            sidebars.len(),
            count_docs(&sidebars),
        ));
        Ok(())
    }
}
