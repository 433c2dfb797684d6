use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use weekcast::{
    azure_openai::AzureOpenAIClient, azure_speech::AzureSpeechClient, segment,
    ssml::DEFAULT_VOICE, tracing::init_tracing_subscriber, AzureOpenAISettings,
    PodcastProcessorBuilder, SpeechSettings, SpeechSynthesizer, DEFAULT_OUTPUT_DIR,
};

#[derive(Parser)]
#[command(
    name = "weekcast",
    about = "Turn a Hebrew Week/Day programme into English podcast episodes"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate, summarize and synthesize a source text
    Run(RunArgs),
    /// Show how an (already English) text splits into episodes, without calling any API
    Segment {
        /// UTF-8 text file to split
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// UTF-8 Hebrew source text
    #[arg(long)]
    input: PathBuf,

    /// Podcast episode number of the first segment
    #[arg(long, default_value = "1")]
    episode: i64,

    /// Azure neural voice used for narration
    #[arg(long, default_value = DEFAULT_VOICE)]
    voice: String,

    /// Directory receiving one audio file per segment
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Also write the title/summary report to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Azure OpenAI API key
    #[arg(long, env = "AZURE_OPENAI_API_KEY", hide_env_values = true)]
    openai_key: String,

    /// Azure OpenAI resource endpoint
    #[arg(long, env = "ENDPOINT")]
    openai_endpoint: String,

    /// Azure OpenAI API version
    #[arg(long, env = "VERSION")]
    openai_version: String,

    /// Chat model deployment name
    #[arg(long, env = "DEPLOYMENT_4o")]
    deployment: String,

    /// Azure speech resource region
    #[arg(long, env = "AZURE_TTS_REGION")]
    tts_region: String,

    /// Azure speech API key
    #[arg(long, env = "AZURE_TTS_API_KEY", hide_env_values = true)]
    tts_key: String,

    /// Override the regional speech endpoint
    #[arg(long, env = "AZURE_TTS_ENDPOINT")]
    tts_endpoint: Option<String>,
}

async fn run_pipeline(args: RunArgs) -> anyhow::Result<()> {
    let source_text = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    if source_text.trim().is_empty() {
        println!("No text to process.");
        return Ok(());
    }

    let generator = AzureOpenAIClient::new(AzureOpenAISettings {
        endpoint: args.openai_endpoint,
        api_key: args.openai_key,
        api_version: args.openai_version,
        deployment: args.deployment,
    });

    let mut synthesizer = AzureSpeechClient::new(SpeechSettings::new(args.tts_region, args.tts_key));
    if let Some(endpoint) = args.tts_endpoint {
        synthesizer = synthesizer.with_endpoint(endpoint);
    }

    let processor = PodcastProcessorBuilder::new()
        .generator(generator)
        .synthesizer(synthesizer)
        .voice(args.voice)
        .output_dir(args.output_dir)
        .build();

    let output = processor.run(&source_text, args.episode).await?;
    let report = output.report();

    println!("=== Translation ===\n{}\n", output.translated);
    println!("=== Episodes ===\n{report}");
    println!("=== Audio ===");
    for artifact in &output.audio_files {
        println!("{}", artifact.file_path.display());
    }

    if let Some(report_path) = args.report {
        tokio::fs::write(&report_path, report)
            .await
            .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
    }

    Ok(())
}

async fn show_segments(input: PathBuf) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let segments = segment(&text);
    if segments.is_empty() {
        println!("No Week/Day markers found.");
        return Ok(());
    }

    for (i, segment) in segments.iter().enumerate() {
        println!(
            "{:>3}. {} -> {} ({} chars)",
            i + 1,
            segment.label,
            segment.audio_file_name(AzureSpeechClient::OUTPUT_EXTENSION),
            segment.content.chars().count()
        );
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    match cli.command {
        Command::Run(args) => run_pipeline(args).await?,
        Command::Segment { input } => show_segments(input).await?,
    }

    Ok(())
}
