pub mod expand;
pub mod explain;
pub mod generate;
pub mod section;

use anyhow::Result;

use crate::config::Config;
use crate::llm::client::LlmClient;
use crate::llm::factory;
use crate::pipeline::Orchestrator;

/// Output format for subcommands that emit a StructuredDocument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rendered README body.
    Markdown,
    /// The structured document as JSON (round-trips into `expand`).
    Json,
}

/// Load config (with an optional model override) and build the orchestrator.
pub fn build_orchestrator(
    config_path: Option<String>,
    model: Option<String>,
    dry_run: bool,
) -> Result<Orchestrator> {
    let mut config = Config::load_with_path(config_path)?;
    if let Some(model) = model {
        config.llm.model = model;
    }
    let client: Box<dyn LlmClient> = factory::create_client(&config, dry_run)?;
    Ok(Orchestrator::new(client))
}
