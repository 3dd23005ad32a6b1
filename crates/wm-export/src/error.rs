use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("behavior '{behavior}' has no initial state; cannot project a matrix")]
    MissingInitialState { behavior: String },

    #[error("initial state '{state}' is not present in behavior '{behavior}'")]
    UnknownInitialState { behavior: String, state: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
