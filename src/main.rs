//! lux-tts CLI entry point.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use lux_tts::backend::{Backend, CoquiBackend, InferenceApiBackend, TokenPolicy};
use lux_tts::cli::{Args, BackendKind};
use lux_tts::engine::SpeechDispatcher;
use lux_tts::model::ModelStore;
use lux_tts::voice::{Language, Speaker};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Handle utility commands first
    if args.list_speakers {
        return list_speakers();
    }

    if args.list_languages {
        return list_languages();
    }

    let store = match &args.model_dir {
        Some(dir) => ModelStore::with_dir(dir.clone()),
        None => ModelStore::new(),
    };

    if args.download_models {
        return download_models(&store);
    }

    // clap guarantees --text is present past this point
    let text = args.text.clone().unwrap_or_default();

    match args.backend {
        BackendKind::Local => {
            let backend = CoquiBackend::new(store).with_program(args.tts_program.clone());
            run_synthesis(backend, &args, &text)
        }
        BackendKind::Remote => {
            let token = args
                .token
                .clone()
                .or_else(|| std::env::var("HF_TOKEN").ok());
            let policy = if args.require_token {
                TokenPolicy::Required
            } else {
                TokenPolicy::Optional
            };
            let backend = InferenceApiBackend::new(&args.model_id, &args.host, token, policy);
            run_synthesis(backend, &args, &text)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn list_speakers() -> Result<()> {
    println!("Available speakers:");
    for speaker in Speaker::ALL {
        println!("  {speaker}");
    }
    Ok(())
}

fn list_languages() -> Result<()> {
    println!("Supported languages:");
    for language in Language::ALL {
        println!("  {} ({})", language.name(), language.code());
    }
    Ok(())
}

fn download_models(store: &ModelStore) -> Result<()> {
    println!("Downloading model artifacts to {}...", store.model_dir().display());

    let client = reqwest::blocking::Client::new();
    store
        .download(&client)
        .context("Failed to download model artifacts")?;

    println!("All model artifacts downloaded.");
    Ok(())
}

fn run_synthesis<B: Backend>(backend: B, args: &Args, text: &str) -> Result<()> {
    let dispatcher = SpeechDispatcher::new(backend);

    println!("Generating speech...");
    println!("  Speaker: {}", args.speaker);
    println!("  Language: {}", args.language);

    let audio_data = dispatcher
        .synthesize(text, args.speaker, args.language)
        .context("Failed to synthesize speech")?;

    // Write audio to file
    let mut file = fs::File::create(&args.output)
        .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;

    file.write_all(&audio_data)
        .with_context(|| format!("Failed to write audio to: {}", args.output.display()))?;

    println!("Audio saved to: {}", args.output.display());
    println!("  Size: {} bytes", audio_data.len());
    if let Some(duration) = wav_duration(&audio_data) {
        println!("  Duration: {duration:.2}s");
    }

    Ok(())
}

/// Decode the duration of a WAV byte buffer, if it parses as one.
fn wav_duration(bytes: &[u8]) -> Option<f32> {
    let reader = hound::WavReader::new(std::io::Cursor::new(bytes)).ok()?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return None;
    }
    Some(reader.duration() as f32 / spec.sample_rate as f32)
}
