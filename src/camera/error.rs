use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
