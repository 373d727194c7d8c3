#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    #[error("Brand error: {0}")]
    Brand(String),

    #[error("Plan error: {0}")]
    Plan(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Contract error: {0}")]
    Contract(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
