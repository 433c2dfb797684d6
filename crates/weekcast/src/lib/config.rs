//! Explicit settings for the cloud collaborators.
//!
//! The library never reads the environment itself; the binary resolves flags and
//! environment variables and hands these structures to the clients.

#[derive(Debug, Clone)]
pub struct AzureOpenAISettings {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    /// Name of the chat model deployment
    pub deployment: String,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    /// Azure region hosting the speech resource, e.g. `westeurope`
    pub region: String,
    pub api_key: String,
    pub output_format: String,
    pub user_agent: String,
}

impl SpeechSettings {
    pub const DEFAULT_OUTPUT_FORMAT: &'static str = "audio-16khz-32kbitrate-mono-mp3";

    pub fn new(region: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            api_key: api_key.into(),
            output_format: Self::DEFAULT_OUTPUT_FORMAT.into(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            self.region
        )
    }
}
