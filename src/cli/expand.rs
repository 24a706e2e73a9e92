use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use super::OutputFormat;
use crate::document::StructuredDocument;

pub async fn run(
    input: String,
    output: String,
    format: OutputFormat,
    config: Option<String>,
    model: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read document file: {}", input))?;
    let current: StructuredDocument = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a structured document", input))?;

    let orchestrator = super::build_orchestrator(config, model, dry_run)?;
    let expanded = orchestrator.expand_document(&current).await?;

    super::generate::write_document(&expanded, &output, format)?;
    info!("Wrote {}", output);
    Ok(())
}
