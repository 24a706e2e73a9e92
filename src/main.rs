use anyhow::Result;
use clap::{Parser, Subcommand};

use readmegen::cli::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "readmegen", version)]
#[command(about = "Generate README documents with an LLM pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a README from a repository URL, a code file, or a prompt
    Generate {
        /// Repository URL to generate from
        #[arg(long)]
        repo_url: Option<String>,

        /// Path to a code file to generate from
        #[arg(long)]
        code_file: Option<String>,

        /// Free-text project idea to generate from
        #[arg(long)]
        prompt: Option<String>,

        /// Output file path
        #[arg(short = 'o', long, default_value = "README.md")]
        output: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,

        /// Path to config file (defaults to ~/.config/readmegen/config.toml or ./readmegen.toml)
        #[arg(long)]
        config: Option<String>,

        /// Override LLM model (e.g., "gpt-4o", "claude-sonnet-4-20250514")
        #[arg(long)]
        model: Option<String>,

        /// Use mock LLM client for testing
        #[arg(long)]
        dry_run: bool,
    },

    /// Expand an existing structured document (JSON) into a more detailed one
    Expand {
        /// Path to a structured document JSON file
        input: String,

        /// Output file path
        #[arg(short = 'o', long, default_value = "README.md")]
        output: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,

        #[arg(long)]
        config: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        dry_run: bool,
    },

    /// Explain a code file at a beginner or technical level
    Explain {
        /// Path to the code file
        file: String,

        /// Audience level: beginner or technical
        #[arg(long, default_value = "beginner")]
        level: String,

        #[arg(long)]
        config: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a single custom README section from a prompt
    Section {
        /// Free-text request for the section
        prompt: String,

        #[arg(long)]
        config: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            repo_url,
            code_file,
            prompt,
            output,
            format,
            config,
            model,
            dry_run,
        } => {
            cli::generate::run(
                repo_url, code_file, prompt, output, format, config, model, dry_run,
            )
            .await?;
        }
        Commands::Expand {
            input,
            output,
            format,
            config,
            model,
            dry_run,
        } => {
            cli::expand::run(input, output, format, config, model, dry_run).await?;
        }
        Commands::Explain {
            file,
            level,
            config,
            model,
            dry_run,
        } => {
            cli::explain::run(file, level, config, model, dry_run).await?;
        }
        Commands::Section {
            prompt,
            config,
            model,
            dry_run,
        } => {
            cli::section::run(prompt, config, model, dry_run).await?;
        }
    }

    Ok(())
}
