use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize target: {0}.")]
    SerializeError(String),
}
