//! Generator binary entry point

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use generator::{
    config::parse_model_list, FileContextSource, GeminiBackend, GeminiSettings, Generator,
    GeneratorConfig,
};
use shared::logging::{init_tracing_with_level, log_startup};

#[derive(Parser)]
#[command(name = "generator")]
#[command(about = "Era content generator backed by a chain of text models")]
struct Args {
    /// Comma-separated model ids in priority order (overrides GENERATOR_MODELS)
    #[arg(long)]
    models: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Directory holding `{decade}.json` context files
    #[arg(long, default_value = "data")]
    context_dir: PathBuf,

    /// Abandon the whole request after this many seconds
    #[arg(long)]
    deadline_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a question of someone living in a decade
    Chat {
        #[arg(long)]
        decade: u16,
        #[arg(long)]
        question: String,
    },
    /// Generate structured content for a single year
    Year {
        #[arg(long)]
        year: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing_with_level(Some(&args.log_level));

    let mut config = GeneratorConfig::from_env().context("Failed to load generator configuration")?;
    if let Some(models) = &args.models {
        config = config.with_models(parse_model_list(models));
    }
    let settings = GeminiSettings::from_env().context("Failed to load Gemini settings")?;

    log_startup(&format!("generator with models [{}]", config.models.join(", ")));

    let generator = Generator::new(GeminiBackend::new(settings), config)
        .context("Invalid generator configuration")?;
    let work = run(&generator, &args);

    let output = match args.deadline_secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), work)
            .await
            .with_context(|| format!("Request exceeded deadline of {secs}s"))??,
        None => work.await?,
    };

    println!("{output}");
    Ok(())
}

async fn run(generator: &Generator<GeminiBackend>, args: &Args) -> anyhow::Result<String> {
    match &args.command {
        Command::Chat { decade, question } => {
            let source = FileContextSource::new(&args.context_dir);
            generator
                .answer_question(&source, question, *decade)
                .await
                .context("Failed to generate chat response")
        }
        Command::Year { year } => {
            let content = generator
                .generate_year_content(*year)
                .await
                .context("Failed to generate year content")?;
            Ok(serde_json::to_string_pretty(&content)?)
        }
    }
}
