mod config;
mod error;
mod llm;
mod processor;
pub mod segmenter;
pub mod tracing;
mod tts;

pub use config::{AzureOpenAISettings, SpeechSettings};
pub use error::Error;
pub use llm::{azure_openai, prompts, TextGenerator};
pub use processor::{
    builder::{PodcastProcessorBuilder, DEFAULT_OUTPUT_DIR},
    report::render_report,
    AudioArtifact, EnrichmentFailure, EnrichmentResult, EnrichmentStage, PodcastOutput,
    PodcastProcessor,
};
pub use segmenter::{segment, Segment};
pub use tts::{azure_speech, ssml, SpeechSynthesizer};
