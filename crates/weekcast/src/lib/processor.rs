pub mod builder;
pub mod report;

use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    prompts,
    segmenter::{segment, Segment},
    ssml::create_ssml,
    Error, SpeechSynthesizer, TextGenerator,
};

/// Which of the two generation calls for a segment failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentStage {
    Title,
    Summary,
}

impl Display for EnrichmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrichmentStage::Title => write!(f, "title"),
            EnrichmentStage::Summary => write!(f, "summary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentFailure {
    pub stage: EnrichmentStage,
    pub message: String,
}

/// Title and summary generated for one segment.
///
/// A failed segment keeps its position in the output; both its title and
/// summary are then absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentResult {
    Enriched {
        label: String,
        title: String,
        summary: String,
    },
    Failed {
        label: String,
        failure: EnrichmentFailure,
    },
}

impl EnrichmentResult {
    pub fn label(&self) -> &str {
        match self {
            EnrichmentResult::Enriched { label, .. } | EnrichmentResult::Failed { label, .. } => {
                label
            }
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            EnrichmentResult::Enriched { title, .. } => Some(title),
            EnrichmentResult::Failed { .. } => None,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            EnrichmentResult::Enriched { summary, .. } => Some(summary),
            EnrichmentResult::Failed { .. } => None,
        }
    }

    pub fn is_enriched(&self) -> bool {
        matches!(self, EnrichmentResult::Enriched { .. })
    }
}

/// A synthesized audio file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub source_label: String,
    pub file_path: PathBuf,
}

/// Everything a single run produces, for the presentation layer
#[derive(Debug)]
pub struct PodcastOutput {
    pub translated: String,
    pub segments: Vec<Segment>,
    pub enrichments: Vec<EnrichmentResult>,
    pub audio_files: Vec<AudioArtifact>,
}

impl PodcastOutput {
    pub fn report(&self) -> String {
        report::render_report(&self.enrichments)
    }
}

/// Turns a source text into podcast episodes: translation, segmentation,
/// per-segment titles and summaries, and one audio file per segment.
///
/// Every collaborator call is awaited before the next one is issued.
#[derive(Debug)]
pub struct PodcastProcessor<G, S>
where
    G: TextGenerator,
    S: SpeechSynthesizer,
{
    generator: G,
    synthesizer: S,
    voice: String,
    output_dir: PathBuf,
}

impl<G, S> PodcastProcessor<G, S>
where
    G: TextGenerator,
    S: SpeechSynthesizer,
{
    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Translates the source text to English with `Week X Day Y` lines added
    #[tracing::instrument(skip_all, fields(text_len = source_text.len()))]
    pub async fn translate(&self, source_text: &str) -> anyhow::Result<String> {
        self.generator
            .generate(
                prompts::translate_system_prompt(),
                &prompts::translate_user_prompt(source_text),
            )
            .await
            .map_err(|e| anyhow::anyhow!("Failed to translate text: {e}"))
    }

    async fn enrich_segment(
        &self,
        segment: &Segment,
        episode: i64,
    ) -> Result<(String, String), EnrichmentFailure> {
        let system_prompt = prompts::summarize_system_prompt();

        let title = self
            .generator
            .generate(
                system_prompt,
                &prompts::title_user_prompt(&segment.content, episode),
            )
            .await
            .map_err(|e| EnrichmentFailure {
                stage: EnrichmentStage::Title,
                message: e.to_string(),
            })?;

        let summary = self
            .generator
            .generate(system_prompt, &prompts::summary_user_prompt(&segment.content))
            .await
            .map_err(|e| EnrichmentFailure {
                stage: EnrichmentStage::Summary,
                message: e.to_string(),
            })?;

        Ok((title, summary))
    }

    /// Generates a title and a summary for every segment, in order.
    ///
    /// The episode number passed to the title prompt starts at `start_episode`
    /// and advances once per segment, failed ones included. A failed segment
    /// is recorded and processing moves on.
    #[tracing::instrument(skip(self, segments), fields(segments = segments.len()))]
    pub async fn enrich(&self, segments: &[Segment], start_episode: i64) -> Vec<EnrichmentResult> {
        let mut results = Vec::with_capacity(segments.len());
        let mut episode = start_episode;

        for segment in segments {
            tracing::info!(label = %segment.label, episode, "Processing segment");

            let result = match self.enrich_segment(segment, episode).await {
                Ok((title, summary)) => {
                    tracing::info!(label = %segment.label, %title, "Received enrichment");
                    EnrichmentResult::Enriched {
                        label: segment.label.clone(),
                        title,
                        summary,
                    }
                }
                Err(failure) => {
                    tracing::error!(
                        label = %segment.label,
                        stage = %failure.stage,
                        error = %failure.message,
                        "Failed to enrich segment"
                    );
                    EnrichmentResult::Failed {
                        label: segment.label.clone(),
                        failure,
                    }
                }
            };

            results.push(result);
            episode = episode.saturating_add(1);
        }

        results
    }

    async fn synthesize_segment(
        &self,
        segment: &Segment,
        voice: &str,
        output_dir: &Path,
    ) -> anyhow::Result<AudioArtifact> {
        let ssml = create_ssml(&segment.content, voice);
        let file_path = output_dir.join(segment.audio_file_name(S::OUTPUT_EXTENSION));

        let audio = self
            .synthesizer
            .synthesize(&ssml)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to synthesize speech: {e}"))?;

        tokio::fs::write(&file_path, audio)
            .await
            .with_context(|| format!("Failed to write audio to {}", file_path.display()))?;

        Ok(AudioArtifact {
            source_label: segment.label.clone(),
            file_path,
        })
    }

    /// Synthesizes each segment's original content into `output_dir`.
    ///
    /// Segments whose synthesis or file write fails are logged and left out,
    /// so the result may be shorter than `segments`. Only failing to create
    /// `output_dir` is returned as an error.
    #[tracing::instrument(skip(self, segments), fields(segments = segments.len()))]
    pub async fn synthesize(
        &self,
        segments: &[Segment],
        voice: &str,
        output_dir: &Path,
    ) -> Result<Vec<AudioArtifact>, Error> {
        tokio::fs::create_dir_all(output_dir)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create output directory"))?;

        let mut artifacts = Vec::new();

        for segment in segments {
            tracing::info!(label = %segment.label, "Synthesizing segment");

            match self.synthesize_segment(segment, voice, output_dir).await {
                Ok(artifact) => {
                    tracing::info!(path = %artifact.file_path.display(), "Audio saved");
                    artifacts.push(artifact);
                }
                Err(e) => {
                    tracing::error!(label = %segment.label, error = ?e, "Failed to produce audio");
                }
            }
        }

        Ok(artifacts)
    }

    /// Runs the whole pipeline over an untranslated source text
    #[tracing::instrument(
        skip(self, source_text),
        fields(voice = %self.voice(), output_dir = %self.output_dir().display())
    )]
    pub async fn run(&self, source_text: &str, start_episode: i64) -> anyhow::Result<PodcastOutput> {
        let translated = self.translate(source_text).await?;

        let segments = segment(&translated);
        if segments.is_empty() {
            tracing::warn!("No Week/Day markers found in translated text");
        }

        let enrichments = self.enrich(&segments, start_episode).await;

        let audio_files = self
            .synthesize(&segments, self.voice(), self.output_dir())
            .await
            .context("Failed to prepare audio output directory")?;

        tracing::info!(
            segments = segments.len(),
            enriched = enrichments.iter().filter(|r| r.is_enriched()).count(),
            audio_files = audio_files.len(),
            "Pipeline finished"
        );

        Ok(PodcastOutput {
            translated,
            segments,
            enrichments,
            audio_files,
        })
    }
}
