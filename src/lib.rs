pub mod bio;
pub mod cli;
pub mod features;
pub mod model;
pub mod pipeline;

pub use crate::bio::sequence::{Peptide, ValidationError};
pub use crate::model::{ForestModel, Prediction};
pub use crate::pipeline::{describe_sequence, predict_batch, predict_sequence};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AipidError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AipidError {
    fn from(err: serde_json::Error) -> Self {
        AipidError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AipidError>;
