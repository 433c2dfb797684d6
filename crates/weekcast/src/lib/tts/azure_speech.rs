use reqwest::{Client, StatusCode};

use crate::{Error, SpeechSettings, SpeechSynthesizer};

/// Azure Cognitive Services text-to-speech REST client.
pub struct AzureSpeechClient {
    client: Client,
    settings: SpeechSettings,
    endpoint: String,
}

impl AzureSpeechClient {
    pub fn new(settings: SpeechSettings) -> Self {
        Self {
            client: Client::new(),
            endpoint: settings.endpoint(),
            settings,
        }
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    pub async fn send_synthesis_request(&self, ssml: &str) -> Result<Vec<u8>, Error> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.settings.api_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", &self.settings.output_format)
            .header("User-Agent", &self.settings.user_agent)
            .body(ssml.as_bytes().to_vec())
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        // the service answers 200 with the audio body; anything else carries error text
        if resp.status() != StatusCode::OK {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Api { status, message });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

impl SpeechSynthesizer for AzureSpeechClient {
    const OUTPUT_EXTENSION: &'static str = "mp3";

    type Error = Error;

    async fn synthesize(&self, ssml: &str) -> Result<Vec<u8>, Self::Error> {
        self.send_synthesis_request(ssml)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to synthesize speech"))
    }
}
