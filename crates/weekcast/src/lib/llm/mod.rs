pub mod azure_openai;
pub mod prompts;

use std::{fmt::Display, future::Future};

/// A chat model that answers a single system + user prompt pair.
pub trait TextGenerator {
    type Error: Display;

    fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>>;
}
