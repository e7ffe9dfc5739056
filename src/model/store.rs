//! Local model artifact storage and hub downloads.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model-hub repository the artifacts are published under.
pub const REPO_ID: &str = "mbarnig/lb-de-fr-en-pt-coqui-vits-tts";

/// The fixed set of artifacts the synthesizer needs.
pub const MODEL_FILES: [&str; 6] = [
    "best_model.pth",
    "config.json",
    "speakers.pth",
    "language_ids.json",
    "model_se.pth",
    "config_se.json",
];

const MANIFEST_FILE: &str = "manifest.json";

/// Errors that can occur while managing model artifacts.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model file not found: {0}")]
    MissingFile(PathBuf),

    #[error("Download failed for {file}: {reason}")]
    DownloadFailed { file: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Record of a completed artifact download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub repo_id: String,
    pub downloaded_at: String,
    pub files: Vec<String>,
}

/// Manages the local model artifact directory.
pub struct ModelStore {
    model_dir: PathBuf,
}

impl ModelStore {
    /// Create a store rooted at the default model directory.
    pub fn new() -> Self {
        let model_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tts")
            .join("custom_models")
            .join("luxembourgish");

        Self { model_dir }
    }

    /// Create a store rooted at a custom directory.
    pub fn with_dir(model_dir: PathBuf) -> Self {
        Self { model_dir }
    }

    /// Get the model directory path.
    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    /// Path to the model weights file.
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join("best_model.pth")
    }

    /// Path to the model configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join("config.json")
    }

    /// Verify that every required artifact is present.
    ///
    /// Fails on the first missing file so the error names exactly what to
    /// download.
    pub fn verify(&self) -> Result<(), ModelError> {
        for file in MODEL_FILES {
            let path = self.model_dir.join(file);
            if !path.is_file() {
                return Err(ModelError::MissingFile(path));
            }
        }
        Ok(())
    }

    /// Download any missing artifacts from the model hub.
    ///
    /// Files already present are left untouched. On success a manifest
    /// recording the repo and download time is written next to the artifacts.
    pub fn download(&self, client: &reqwest::blocking::Client) -> Result<(), ModelError> {
        fs::create_dir_all(&self.model_dir)?;

        for file in MODEL_FILES {
            let dest = self.model_dir.join(file);
            if dest.is_file() {
                debug!("{file} already present, skipping");
                continue;
            }
            info!("downloading {file} from {REPO_ID}");
            download_repo_file(client, REPO_ID, file, &dest)?;
        }

        let manifest = Manifest {
            repo_id: REPO_ID.to_string(),
            downloaded_at: Utc::now().to_rfc3339(),
            files: MODEL_FILES.iter().map(|f| f.to_string()).collect(),
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(self.model_dir.join(MANIFEST_FILE), json)?;

        Ok(())
    }

    /// Load the download manifest, if one exists.
    pub fn manifest(&self) -> Result<Option<Manifest>, ModelError> {
        let path = self.model_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let json = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch one file from the hub's resolve endpoint into `dest`.
///
/// Downloads into a sibling temp file and renames, so an interrupted
/// transfer never leaves a truncated artifact behind.
fn download_repo_file(
    client: &reqwest::blocking::Client,
    repo_id: &str,
    file_name: &str,
    dest: &Path,
) -> Result<(), ModelError> {
    let url = format!("https://huggingface.co/{repo_id}/resolve/main/{file_name}?download=true");
    let temp_path = dest.with_extension("download.tmp");

    let result = (|| -> Result<(), ModelError> {
        let mut response = client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ModelError::DownloadFailed {
                file: file_name.to_string(),
                reason: e.to_string(),
            })?;

        let mut file = fs::File::create(&temp_path)?;
        io::copy(&mut response, &mut file).map_err(|e| ModelError::DownloadFailed {
            file: file_name.to_string(),
            reason: e.to_string(),
        })?;
        file.flush()?;

        fs::rename(&temp_path, dest)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
