use reqwest::Client;
use serde::Deserialize;

use crate::{AzureOpenAISettings, Error, TextGenerator};

/// Chat completions against an Azure OpenAI model deployment.
pub struct AzureOpenAIClient {
    client: Client,
    settings: AzureOpenAISettings,
}

impl AzureOpenAIClient {
    pub fn new(settings: AzureOpenAISettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.deployment,
            self.settings.api_version
        )
    }

    pub async fn send_completion_request(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<CompletionResponse, Error> {
        let body = serde_json::json!({
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_prompt
                }
            ]
        });

        let resp = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Trimmed content of the first choice, if any
    pub fn first_content(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(|content| content.trim().to_string())
    }
}

impl TextGenerator for AzureOpenAIClient {
    type Error = Error;

    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        let response = self
            .send_completion_request(system_prompt, user_prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate completion"))?;

        response.first_content().ok_or(Error::EmptyCompletion)
    }
}
