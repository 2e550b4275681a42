use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),

    #[error("Coordinate out of range for {label}: {axis} = {value} (expected 0..=10)")]
    OutOfRange {
        label: String,
        axis: &'static str,
        value: f64,
    },

    #[error("Failed to parse dataset: {0}")]
    ParseFailed(String),
}
