use anyhow::{Context, Result};
use std::fs;

use crate::document::ExplainLevel;

pub async fn run(
    file: String,
    level: String,
    config: Option<String>,
    model: Option<String>,
    dry_run: bool,
) -> Result<()> {
    // Reject a bad level before touching the file system or config.
    let level: ExplainLevel = level.parse()?;
    let code = fs::read_to_string(&file)
        .with_context(|| format!("failed to read code file: {}", file))?;

    let orchestrator = super::build_orchestrator(config, model, dry_run)?;
    let explanation = orchestrator.explain_code(&code, level.as_str()).await?;

    println!("{}", explanation);
    Ok(())
}
