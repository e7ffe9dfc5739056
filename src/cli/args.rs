//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::model;
use crate::voice::{Language, Speaker};

/// Luxembourgish multilingual text-to-speech CLI.
#[derive(Parser, Debug)]
#[command(name = "lux-tts")]
#[command(about = "Convert Luxembourgish (and four other languages) text to speech")]
#[command(version)]
pub struct Args {
    /// Text to convert to speech
    #[arg(
        short,
        long,
        required_unless_present_any = ["list_speakers", "list_languages", "download_models"]
    )]
    pub text: Option<String>,

    /// Language (name or engine code, e.g. "german" or "x-de")
    #[arg(short, long, value_enum, default_value = "luxembourgish")]
    pub language: Language,

    /// Speaker voice
    #[arg(short, long, value_enum, default_value = "judith")]
    pub speaker: Speaker,

    /// Output audio file
    #[arg(short, long, default_value = "output.wav")]
    pub output: PathBuf,

    /// Synthesis backend: "local" model or "remote" inference endpoint
    #[arg(short, long, value_enum, default_value = "local")]
    pub backend: BackendKind,

    /// Directory holding the local model artifacts
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Hosted model identifier
    #[arg(long, default_value = model::REPO_ID)]
    pub model_id: String,

    /// Inference hub host
    #[arg(long, default_value = "huggingface.co")]
    pub host: String,

    /// API token (falls back to the HF_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,

    /// Refuse to call the remote endpoint anonymously
    #[arg(long)]
    pub require_token: bool,

    /// Local synthesis engine program
    #[arg(long, default_value = "tts")]
    pub tts_program: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// List available speaker voices
    #[arg(long)]
    pub list_speakers: bool,

    /// List supported languages
    #[arg(long)]
    pub list_languages: bool,

    /// Download the model artifacts and exit
    #[arg(long)]
    pub download_models: bool,
}

/// Backend selection.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Locally downloaded model run through the Coqui engine
    #[default]
    Local,

    /// Hosted inference endpoint over HTTP
    Remote,
}
