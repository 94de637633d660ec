pub mod target;

use crate::args::{Cli, Commands};
use crate::config;
use crate::error::GardenctlError;

/// Runs the parsed command line and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String, GardenctlError> {
    let config = cli.config.as_deref().map(config::load_config).transpose()?;

    match &cli.command {
        Commands::Target(args) => target::execute(args, config.as_ref()),
    }
}
