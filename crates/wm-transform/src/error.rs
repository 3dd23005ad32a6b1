use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("initial state '{state}' is not present in behavior '{behavior}'")]
    UnknownInitialState { behavior: String, state: String },

    #[error(
        "state '{state}' in behavior '{behavior}' keeps all probability mass \
         in a self-loop (p >= 1); it cannot be contracted"
    )]
    DegenerateSelfLoop { behavior: String, state: String },
}

pub type TransformResult<T> = Result<T, TransformError>;
