use thiserror::Error;

use wm_export::ExportError;
use wm_model::ModelError;
use wm_transform::TransformError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("at least one behavior model is required")]
    NoModels,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
