//! Command to print the resolved configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_options, GlobalOptions};
use clap::Args;

/// Print the configuration every layer resolves to, as YAML.
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    /// Execute the show-config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, None)?;
        let options = resolve_options(&config)?;

        let mut resolved = options.to_config();
        resolved.output_format = Some(config.output_format.unwrap_or_default());

        let yaml = serde_yaml::to_string(&resolved).map_err(|e| CliError::Library(e.into()))?;
        print!("{yaml}");
        Ok(())
    }
}
