//! Synthesis backends.
//!
//! A request can be served by a locally downloaded model run through the
//! external Coqui engine, or by a hosted inference endpoint over HTTP. Both
//! are a single blocking call with no retry or caching.

mod local;
mod remote;
mod types;

pub use local::CoquiBackend;
pub use remote::{InferenceApiBackend, TokenPolicy};
pub use types::{BackendError, InferenceParameters, InferencePayload, SynthesisRequest};

/// Trait for speech synthesis backends.
///
/// Abstracts the two call styles so the dispatcher and tests don't care
/// which one is behind it.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Synthesize speech from the request.
    ///
    /// # Returns
    /// Raw WAV audio data.
    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError>;
}
