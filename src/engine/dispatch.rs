//! Speech request dispatcher.

use log::info;
use thiserror::Error;

use crate::backend::{Backend, BackendError, SynthesisRequest};
use crate::voice::{Language, Speaker};

/// Errors that can occur while dispatching a synthesis request.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Please enter some text to convert to speech")]
    EmptyText,

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Validates a request and hands it to the configured backend.
///
/// One blocking backend call per invocation; the returned bytes belong to
/// the caller unmodified.
pub struct SpeechDispatcher<B: Backend> {
    backend: B,
}

impl<B: Backend> SpeechDispatcher<B> {
    /// Create a dispatcher over a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Synthesize speech from text.
    ///
    /// Empty or whitespace-only text never reaches the backend.
    pub fn synthesize(
        &self,
        text: &str,
        speaker: Speaker,
        language: Language,
    ) -> Result<Vec<u8>, DispatchError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DispatchError::EmptyText);
        }

        info!("synthesizing {} chars, speaker={speaker}, language={language}", text.len());

        let request = SynthesisRequest::new(text, speaker, language);
        Ok(self.backend.synthesize(&request)?)
    }
}
