//! lux-tts: Luxembourgish multilingual text-to-speech CLI.
//!
//! A thin front-end over a pretrained VITS model: collects text plus speaker
//! and language selectors and forwards them either to the locally downloaded
//! model (run through the external Coqui engine) or to a hosted inference
//! endpoint, writing the returned waveform to a WAV file.

pub mod backend;
pub mod cli;
pub mod engine;
pub mod model;
pub mod voice;
