//! Index command implementation.
//!
//! This module implements the `index` command, which builds the document a
//! scenario describes, mounts and unmounts its elements through an indexer,
//! and prints the resulting identifiers (text, JSON or YAML).

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_options, GlobalOptions};
use clap::{Args, ValueEnum};
use spray::{Config, OutputFormat, Scenario};
use std::path::PathBuf;

/// Run a scenario and print the identifiers it produces.
#[derive(Args)]
pub struct IndexCommand {
    /// Scenario file (YAML)
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// String joining path segments
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Text placed before a sibling index
    #[arg(long, value_name = "PREFIX", allow_hyphen_values = true)]
    pub index_prefix: Option<String>,

    /// Text placed after a sibling index
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub index_suffix: Option<String>,

    /// Append an index to every segment
    #[arg(long)]
    pub force_index: bool,

    /// Index only segments with same-kind siblings, overriding configuration
    #[arg(long, conflicts_with = "force_index")]
    pub no_force_index: bool,

    /// Attribute holding explicit base identifiers
    #[arg(long, value_name = "NAME")]
    pub input_attribute: Option<String>,

    /// Attribute receiving identifiers (repeatable)
    #[arg(long = "output-attribute", value_name = "NAME")]
    pub output_attributes: Vec<String>,

    /// Kind of the ancestor that bounds every path
    #[arg(long, value_name = "KIND")]
    pub anchor: Option<String>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

/// Output format for the index command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// One `identifier<TAB>name` line per element
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

impl IndexCommand {
    /// Command-line settings as the highest-precedence configuration layer.
    fn overrides(&self) -> Config {
        Config {
            input_attribute: self.input_attribute.clone(),
            output_attributes: (!self.output_attributes.is_empty())
                .then(|| self.output_attributes.clone()),
            separator: self.separator.clone(),
            force_index: if self.force_index {
                Some(true)
            } else if self.no_force_index {
                Some(false)
            } else {
                None
            },
            index_prefix: self.index_prefix.clone(),
            index_suffix: self.index_suffix.clone(),
            anchor: self.anchor.clone(),
            output_format: self.format.map(Into::into),
        }
    }

    /// Execute the index command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check the scenario exists
        if !self.scenario.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.scenario.display()
            )));
        }

        // 2. Resolve configuration
        let config = load_configuration(global, Some(self.overrides()))?;
        let options = resolve_options(&config)?;

        // 3. Run the scenario
        let scenario = Scenario::load(&self.scenario)?;
        let report = scenario.run(&options)?;
        log::info!(
            "{} tracked elements in {}",
            report.entries.len(),
            self.scenario.display()
        );

        // 4. Print the report
        let format = config.output_format.unwrap_or_default();
        let output = format.create_formatter().format(&report)?;
        if !output.is_empty() {
            println!("{output}");
        }

        Ok(())
    }
}
