use anyhow::{bail, Context, Result};
use std::fs;
use tracing::info;

use super::OutputFormat;
use crate::document::{GenerationRequest, StructuredDocument};

#[allow(clippy::too_many_arguments)]
pub async fn run(
    repo_url: Option<String>,
    code_file: Option<String>,
    prompt: Option<String>,
    output: String,
    format: OutputFormat,
    config: Option<String>,
    model: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let request = match (repo_url, code_file, prompt) {
        (Some(repo_url), None, None) => GenerationRequest::Url { repo_url },
        (None, Some(path), None) => {
            let code_content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read code file: {}", path))?;
            GenerationRequest::Code { code_content }
        }
        (None, None, Some(user_prompt)) => GenerationRequest::Prompt { user_prompt },
        _ => bail!("provide exactly one of --repo-url, --code-file, or --prompt"),
    };

    let orchestrator = super::build_orchestrator(config, model, dry_run)?;
    let document = orchestrator.generate(request).await?;

    write_document(&document, &output, format)?;
    info!("Wrote {}", output);
    Ok(())
}

pub fn write_document(
    document: &StructuredDocument,
    output: &str,
    format: OutputFormat,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Markdown => document.to_markdown(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(document)
                .context("failed to serialize document")?;
            json.push('\n');
            json
        }
    };
    fs::write(output, rendered).with_context(|| format!("failed to write {}", output))
}
