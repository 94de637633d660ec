pub mod errors;

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

use errors::ConfigError;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gardens: Vec<Garden>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Garden {
    #[serde(alias = "name")]
    pub identity: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub kubeconfig: Option<String>,
}

impl Config {
    /// Looks up a garden by identity or alias.
    pub fn garden(&self, name: &str) -> Option<&Garden> {
        self.gardens
            .iter()
            .find(|g| g.identity == name || g.alias.as_deref() == Some(name))
    }

    fn check_unique_names(&self) -> Result<(), ConfigError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.gardens.len() * 2);
        for garden in &self.gardens {
            let alias = garden.alias.as_deref().filter(|a| *a != garden.identity);
            for name in std::iter::once(garden.identity.as_str()).chain(alias) {
                if !seen.insert(name) {
                    return Err(ConfigError::DuplicateGarden(name.to_string()));
                }
            }
        }
        Ok(())
    }
}

/// Loads the gardenctl configuration, picking the parser from the file extension.
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigError::FileError(format!("failed to open file {}: {}", path, e)))?;

    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let config: Config = match ext.as_str() {
        "toml" => toml::from_str(&text).map_err(|e| ConfigError::ParseError(e.to_string()))?,
        "yaml" | "yml" => {
            serde_yaml::from_str(&text).map_err(|e| ConfigError::ParseError(e.to_string()))?
        }
        "json" => serde_json::from_str(&text).map_err(|e| ConfigError::ParseError(e.to_string()))?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_string())),
    };

    config.check_unique_names()?;

    info!(path, gardens = config.gardens.len(), "loaded config");
    Ok(config)
}
