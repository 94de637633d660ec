use thiserror::Error;

use crate::config::errors::ConfigError;
use crate::output::errors::OutputError;
use crate::target::errors::TargetError;

#[derive(Debug, Error)]
pub enum GardenctlError {
    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("no target flags given, use --garden, --project, --seed or --shoot")]
    NoTargetFlags,

    #[error("the garden must be set when using target flags")]
    MissingGarden,

    #[error("garden {0:?} is not defined in the gardenctl configuration")]
    GardenNotConfigured(String),
}
