//! Backend request types and errors.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::voice::{Language, Speaker};

/// Errors that can occur when talking to a synthesis backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Missing API token: this endpoint requires authentication")]
    MissingToken,

    #[error("Invalid API token")]
    InvalidToken,

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Model file not found: {0}")]
    MissingModelFile(PathBuf),

    #[error("Synthesis engine failed: {0}")]
    EngineFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<crate::model::ModelError> for BackendError {
    fn from(err: crate::model::ModelError) -> Self {
        match err {
            crate::model::ModelError::MissingFile(path) => BackendError::MissingModelFile(path),
            other => BackendError::EngineFailed(other.to_string()),
        }
    }
}

/// A single speech synthesis request.
///
/// Scoped to one backend call; the selectors are discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub speaker: Speaker,
    pub language: Language,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, speaker: Speaker, language: Language) -> Self {
        Self {
            text: text.into(),
            speaker,
            language,
        }
    }
}

/// JSON body for the hosted inference endpoint.
#[derive(Debug, Serialize)]
pub struct InferencePayload {
    pub inputs: String,
    pub parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
pub struct InferenceParameters {
    pub speaker: String,
    pub language: String,
}

impl From<&SynthesisRequest> for InferencePayload {
    fn from(request: &SynthesisRequest) -> Self {
        Self {
            inputs: request.text.clone(),
            parameters: InferenceParameters {
                speaker: request.speaker.as_str().to_string(),
                language: request.language.code().to_string(),
            },
        }
    }
}
