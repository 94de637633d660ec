use tracing::debug;

use crate::args::TargetArgs;
use crate::config::{Config, Garden};
use crate::error::GardenctlError;
use crate::output;
use crate::target::Target;
use crate::target::args::TargetFlags;

/// Turns the target flags into a usable target.
///
/// When a config is given the garden must be listed in it; an alias is
/// replaced by the garden's identity.
pub fn resolve_target<'c>(
    flags: &TargetFlags,
    config: Option<&'c Config>,
) -> Result<(Target, Option<&'c Garden>), GardenctlError> {
    if flags.is_empty() {
        return Err(GardenctlError::NoTargetFlags);
    }

    if !flags.is_target_valid() {
        if flags.garden_name().is_empty() {
            return Err(GardenctlError::MissingGarden);
        }
        flags.to_target().validate()?;
    }

    let mut target = flags.to_target();

    let garden = match config {
        Some(config) => {
            let garden = config.garden(target.garden_name()).ok_or_else(|| {
                GardenctlError::GardenNotConfigured(target.garden_name().to_string())
            })?;
            target = target.with_garden_name(garden.identity.as_str());
            Some(garden)
        }
        None => None,
    };

    debug!(%target, "resolved target");
    Ok((target, garden))
}

pub fn execute(args: &TargetArgs, config: Option<&Config>) -> Result<String, GardenctlError> {
    let (target, garden) = resolve_target(&args.target, config)?;
    Ok(output::render_target(&target, garden, args.output.output)?)
}
