pub mod azure_speech;
pub mod ssml;

use std::{fmt::Display, future::Future};

/// Turns a speech-markup document into encoded audio.
pub trait SpeechSynthesizer {
    /// File extension matching the encoding the synthesizer returns
    const OUTPUT_EXTENSION: &'static str;

    type Error: Display;

    fn synthesize(&self, ssml: &str) -> impl Future<Output = Result<Vec<u8>, Self::Error>>;
}
