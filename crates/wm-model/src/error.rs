use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("behavior model parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
