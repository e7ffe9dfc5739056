//! Local synthesis through the external Coqui `tts` engine.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use super::Backend;
use super::types::{BackendError, SynthesisRequest};
use crate::model::ModelStore;

const DEFAULT_PROGRAM: &str = "tts";

/// Backend that runs a locally downloaded VITS model.
///
/// All synthesis computation happens in the external engine; this type does
/// the artifact pre-flight checks, maps the request onto engine arguments,
/// and reads back the WAV the engine writes.
pub struct CoquiBackend {
    store: ModelStore,
    program: String,
}

impl CoquiBackend {
    /// Create a backend over the given artifact store.
    pub fn new(store: ModelStore) -> Self {
        Self {
            store,
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Override the engine program name (e.g. a wrapper script).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Engine command-line arguments for one request.
    fn engine_args(&self, request: &SynthesisRequest, out_path: &Path) -> Vec<String> {
        vec![
            "--text".to_string(),
            request.text.clone(),
            "--model_path".to_string(),
            self.store.model_path().display().to_string(),
            "--config_path".to_string(),
            self.store.config_path().display().to_string(),
            "--speaker_idx".to_string(),
            request.speaker.as_str().to_string(),
            "--language_idx".to_string(),
            request.language.code().to_string(),
            "--out_path".to_string(),
            out_path.display().to_string(),
        ]
    }
}

impl Backend for CoquiBackend {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError> {
        // All six artifacts must be in place before the engine is invoked.
        self.store.verify()?;

        let out_file = tempfile::Builder::new()
            .prefix("lux-tts-")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| BackendError::EngineFailed(e.to_string()))?;

        let args = self.engine_args(request, out_file.path());
        debug!("running {} with model {}", self.program, self.store.model_path().display());

        let output = Command::new(&self.program)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                BackendError::EngineFailed(format!(
                    "failed to execute '{}': {e}; ensure the engine is installed",
                    self.program
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BackendError::EngineFailed(stderr.trim().to_string()));
        }

        std::fs::read(out_file.path()).map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
