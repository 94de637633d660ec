use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Failed to parse config: {0}.")]
    ParseError(String),

    #[error("Unsupported config format: {0}.")]
    UnsupportedFormat(String),

    #[error("Garden defined more than once: {0}.")]
    DuplicateGarden(String),
}
