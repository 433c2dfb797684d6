use std::sync::{Arc, Mutex};
use weekcast::{segment, TextGenerator};

#[derive(Clone)]
pub struct MockTextGenerator {
    pub translation: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    /// Any user prompt containing one of these fails
    pub fail_on: Vec<String>,
}

impl MockTextGenerator {
    pub fn new(translation: &str) -> Self {
        Self {
            translation: translation.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on: Vec::new(),
        }
    }

    pub fn failing_on(translation: &str, needles: &[&str]) -> Self {
        Self {
            fail_on: needles.iter().map(|n| n.to_string()).collect(),
            ..Self::new(translation)
        }
    }

    pub fn title_prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.contains("episode title"))
            .cloned()
            .collect()
    }

    pub fn summary_prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.contains("episode summary"))
            .cloned()
            .collect()
    }
}

impl TextGenerator for MockTextGenerator {
    type Error = anyhow::Error;

    async fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(user_prompt.to_string());

        if let Some(needle) = self.fail_on.iter().find(|n| user_prompt.contains(n.as_str())) {
            return Err(anyhow::anyhow!("mock failure on {}", needle));
        }

        let label = segment(user_prompt)
            .first()
            .map(|s| s.label.clone())
            .unwrap_or_default();

        if user_prompt.contains("episode title") {
            Ok(format!("Title of {label}"))
        } else if user_prompt.contains("episode summary") {
            Ok(format!("Summary of {label}"))
        } else {
            Ok(self.translation.clone())
        }
    }
}
