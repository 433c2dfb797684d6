use std::sync::{Arc, Mutex};
use weekcast::SpeechSynthesizer;

pub const MOCK_AUDIO: &[u8] = b"ID3-mock-audio";

#[derive(Clone)]
pub struct MockSpeechSynthesizer {
    pub calls: Arc<Mutex<Vec<String>>>,
    /// Any markup containing one of these fails
    pub fail_on: Vec<String>,
}

impl Default for MockSpeechSynthesizer {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on: Vec::new(),
        }
    }
}

impl MockSpeechSynthesizer {
    pub fn failing_on(needles: &[&str]) -> Self {
        Self {
            fail_on: needles.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl SpeechSynthesizer for MockSpeechSynthesizer {
    const OUTPUT_EXTENSION: &'static str = "mp3";
    type Error = anyhow::Error;

    async fn synthesize(&self, ssml: &str) -> Result<Vec<u8>, Self::Error> {
        self.calls.lock().unwrap().push(ssml.to_string());

        if let Some(needle) = self.fail_on.iter().find(|n| ssml.contains(n.as_str())) {
            return Err(anyhow::anyhow!("401 - invalid subscription key ({})", needle));
        }

        Ok(MOCK_AUDIO.to_vec())
    }
}
