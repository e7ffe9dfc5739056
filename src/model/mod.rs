//! Model artifact management.
//!
//! The synthesizer needs six pretrained artifacts fetched from a model-hub
//! repository and expected at fixed local paths. This module owns the
//! directory layout, the pre-flight existence checks, and the downloads.

mod store;

pub use store::{MODEL_FILES, Manifest, ModelError, ModelStore, REPO_ID};
