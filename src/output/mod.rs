pub mod args;
pub mod errors;

use crate::config::Garden;
use crate::target::Target;
use crate::visuals;
use args::OutputFormat;
use errors::OutputError;

pub fn render_target(
    target: &Target,
    garden: Option<&Garden>,
    format: OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(visuals::target_table(target, garden).to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(target)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| OutputError::SerializeError(e.to_string())),
        OutputFormat::Json => serde_json::to_string_pretty(target)
            .map_err(|e| OutputError::SerializeError(e.to_string())),
    }
}
