//! Generation operations: the individual request/response units.
//!
//! Every operation follows the same path: validate input against the
//! contract's input schema, render the prompt, send it to the model runtime,
//! strip stray code fences, parse the structured response, and validate it
//! against the output schema. A response that fails validation fails the
//! operation as a whole. Beyond the model call, operations have no side
//! effects.

use serde_json::Value;
use tracing::{debug, warn};

use crate::contracts;
use crate::document::{CustomSection, StructuredDocument};
use crate::error::PipelineError;
use crate::llm::client::LlmClient;
use crate::schema::{FieldValues, OperationContract};

/// Strip markdown code fences from model output (```json ... ``` or ```...```).
/// Models sometimes wrap structured responses despite instructions not to.
fn strip_markdown_fences(content: &str) -> String {
    let trimmed = content.trim();

    for prefix in ["```json", "```markdown", "```"] {
        if trimmed.starts_with(prefix) && trimmed.ends_with("```") && trimmed.len() > prefix.len() + 3 {
            if let Some(inner) = trimmed
                .strip_prefix(prefix)
                .and_then(|s| s.strip_suffix("```"))
            {
                return inner.trim().to_string();
            }
        }
    }

    content.to_string()
}

/// Run one operation end to end and return its validated output fields.
/// `failure_message` is the operation-specific message surfaced when the
/// model runtime returns nothing or cannot be reached.
async fn invoke(
    client: &dyn LlmClient,
    contract: &OperationContract,
    values: &FieldValues,
    failure_message: &str,
) -> Result<FieldValues, PipelineError> {
    let prompt = contract.render_prompt(values)?;

    debug!(operation = contract.name, "invoking model");
    let raw = match client.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(operation = contract.name, error = %e, "model invocation failed");
            return Err(PipelineError::ModelInvocation {
                operation: contract.name,
                message: failure_message.to_string(),
            });
        }
    };

    let stripped = strip_markdown_fences(&raw);
    if stripped.trim().is_empty() {
        return Err(PipelineError::ModelInvocation {
            operation: contract.name,
            message: failure_message.to_string(),
        });
    }

    let parsed: Value =
        serde_json::from_str(stripped.trim()).map_err(|e| PipelineError::SchemaViolation {
            operation: contract.name,
            detail: format!("response is not valid JSON: {}", e),
        })?;

    contract
        .output
        .validate_response(&parsed)
        .map_err(|detail| PipelineError::SchemaViolation {
            operation: contract.name,
            detail,
        })
}

fn take(fields: &mut FieldValues, name: &'static str) -> String {
    // Output validation guarantees presence; empty only if the schema changed
    // without this accessor.
    fields.remove(name).unwrap_or_default()
}

fn document_from_fields(
    operation: &'static str,
    fields: FieldValues,
) -> Result<StructuredDocument, PipelineError> {
    let value =
        serde_json::to_value(&fields).map_err(|e| PipelineError::SchemaViolation {
            operation,
            detail: e.to_string(),
        })?;
    serde_json::from_value(value).map_err(|e| PipelineError::SchemaViolation {
        operation,
        detail: e.to_string(),
    })
}

/// Summarize a repository URL or raw code into README-description prose.
pub async fn summarize_input(
    client: &dyn LlmClient,
    source_content: &str,
) -> Result<String, PipelineError> {
    let mut values = FieldValues::new();
    values.insert("sourceContent", source_content.to_string());
    let mut output = invoke(
        client,
        &contracts::SUMMARIZE_INPUT,
        &values,
        "AI failed to summarize the input.",
    )
    .await?;
    Ok(take(&mut output, "summary"))
}

/// Suggest a project name from a description and a languages-as-text list.
pub async fn suggest_name(
    client: &dyn LlmClient,
    description: &str,
    languages: &str,
) -> Result<String, PipelineError> {
    let mut values = FieldValues::new();
    values.insert("description", description.to_string());
    values.insert("languages", languages.to_string());
    let mut output = invoke(
        client,
        &contracts::SUGGEST_NAME,
        &values,
        "AI failed to suggest a project name.",
    )
    .await?;
    Ok(take(&mut output, "projectName"))
}

/// The three chain-produced README sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSections {
    pub features: String,
    pub technologies_used: String,
    pub setup_instructions: String,
}

/// Generate Features / Technologies Used / Setup Instructions. Depends on
/// the project name already being resolved.
pub async fn generate_sections(
    client: &dyn LlmClient,
    repo_url: &str,
    file_contents: &str,
    project_name: &str,
) -> Result<GeneratedSections, PipelineError> {
    let mut values = FieldValues::new();
    values.insert("repoUrl", repo_url.to_string());
    values.insert("fileContents", file_contents.to_string());
    values.insert("projectName", project_name.to_string());
    let mut output = invoke(
        client,
        &contracts::GENERATE_SECTIONS,
        &values,
        "AI failed to generate README sections.",
    )
    .await?;
    Ok(GeneratedSections {
        features: take(&mut output, "features"),
        technologies_used: take(&mut output, "technologiesUsed"),
        setup_instructions: take(&mut output, "setupInstructions"),
    })
}

/// Generate the full six-field document in one call from a free-text idea.
pub async fn generate_from_prompt(
    client: &dyn LlmClient,
    user_prompt: &str,
) -> Result<StructuredDocument, PipelineError> {
    let mut values = FieldValues::new();
    values.insert("userPrompt", user_prompt.to_string());
    let output = invoke(
        client,
        &contracts::GENERATE_FROM_PROMPT,
        &values,
        "AI failed to generate README content from the prompt.",
    )
    .await?;
    document_from_fields(contracts::GENERATE_FROM_PROMPT.name, output)
}

/// Normalize a section title to exactly one level-2 heading marker.
/// Deterministic post-processing, not a retry: any existing heading markers
/// are stripped and the canonical `## ` prefix is prepended.
fn normalize_section_title(title: &str) -> String {
    let stripped = title.trim().trim_start_matches('#').trim();
    format!("## {}", stripped)
}

/// Generate a single custom README section from a free-text request.
pub async fn generate_custom_section(
    client: &dyn LlmClient,
    user_prompt: &str,
) -> Result<CustomSection, PipelineError> {
    let mut values = FieldValues::new();
    values.insert("userPrompt", user_prompt.to_string());
    let mut output = invoke(
        client,
        &contracts::GENERATE_CUSTOM_SECTION,
        &values,
        "AI failed to generate the custom section.",
    )
    .await?;
    Ok(CustomSection {
        section_title: normalize_section_title(&take(&mut output, "sectionTitle")),
        section_description: take(&mut output, "sectionDescription"),
    })
}

/// Expand an existing document into a more detailed one. The richer-than-
/// before expectation is a model-side instruction only; a schema-valid
/// output is authoritative.
pub async fn generate_detailed_expansion(
    client: &dyn LlmClient,
    current: &StructuredDocument,
) -> Result<StructuredDocument, PipelineError> {
    let mut values = FieldValues::new();
    values.insert("projectName", current.project_name.clone());
    values.insert("projectDescription", current.project_description.clone());
    values.insert("currentFeatures", current.features.clone());
    values.insert("currentTechnologiesUsed", current.technologies_used.clone());
    values.insert("currentSetupInstructions", current.setup_instructions.clone());
    values.insert("currentFolderStructure", current.folder_structure.clone());
    let output = invoke(
        client,
        &contracts::GENERATE_DETAILED_EXPANSION,
        &values,
        "AI failed to generate detailed README content.",
    )
    .await?;
    document_from_fields(contracts::GENERATE_DETAILED_EXPANSION.name, output)
}

/// Explain a code snippet for a beginner or technical audience. An
/// unrecognized level fails input validation before any model call.
pub async fn explain_snippet(
    client: &dyn LlmClient,
    code: &str,
    level: &str,
) -> Result<String, PipelineError> {
    let mut values = FieldValues::new();
    values.insert("code", code.to_string());
    values.insert("level", level.to_string());
    let mut output = invoke(
        client,
        &contracts::EXPLAIN_SNIPPET,
        &values,
        "AI failed to generate an explanation for the code.",
    )
    .await?;
    Ok(take(&mut output, "explanation"))
}
