use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to serialize page data: {0}")]
    Serialize(#[from] serde_json::Error),
}
