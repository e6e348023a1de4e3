/// Errors reported by dataset construction, configuration and inference.
///
/// The built-in NAND run never produces one of these; they exist for callers
/// that bring their own data or hyperparameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PerceptronError {
    #[error("shape mismatch: expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("dataset must contain at least one example")]
    EmptyDataset,

    #[error("{inputs} input rows but {labels} labels")]
    LabelCountMismatch { inputs: usize, labels: usize },

    #[error("label {value} at index {index} is not 0 or 1")]
    NonBinaryLabel { index: usize, value: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
