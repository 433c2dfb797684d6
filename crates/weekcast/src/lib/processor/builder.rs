use std::path::PathBuf;

use crate::{ssml::DEFAULT_VOICE, PodcastProcessor, SpeechSynthesizer, TextGenerator};

pub const DEFAULT_OUTPUT_DIR: &str = "audio";

pub struct PodcastProcessorBuilder<G = (), S = ()> {
    generator: G,
    synthesizer: S,
    voice: String,
    output_dir: PathBuf,
}

impl PodcastProcessorBuilder {
    pub fn new() -> Self {
        Self {
            generator: (),
            synthesizer: (),
            voice: DEFAULT_VOICE.into(),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
        }
    }
}

impl Default for PodcastProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, S> PodcastProcessorBuilder<G, S> {
    pub fn generator<G2: TextGenerator>(self, generator: G2) -> PodcastProcessorBuilder<G2, S> {
        PodcastProcessorBuilder {
            generator,
            synthesizer: self.synthesizer,
            voice: self.voice,
            output_dir: self.output_dir,
        }
    }

    pub fn synthesizer<S2: SpeechSynthesizer>(
        self,
        synthesizer: S2,
    ) -> PodcastProcessorBuilder<G, S2> {
        PodcastProcessorBuilder {
            generator: self.generator,
            synthesizer,
            voice: self.voice,
            output_dir: self.output_dir,
        }
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl<G, S> PodcastProcessorBuilder<G, S>
where
    G: TextGenerator,
    S: SpeechSynthesizer,
{
    pub fn build(self) -> PodcastProcessor<G, S> {
        PodcastProcessor {
            generator: self.generator,
            synthesizer: self.synthesizer,
            voice: self.voice,
            output_dir: self.output_dir,
        }
    }
}
