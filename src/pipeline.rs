//! Pipeline orchestrator: sequences generation operations into the
//! top-level workflows and assembles the final document.
//!
//! Workflows are strict linear chains. Each step suspends until its
//! operation resolves, the first failure is terminal for the whole run, and
//! no operation is ever retried or silently defaulted. Every run works
//! against fresh intermediate values; the orchestrator holds no mutable
//! state, so independent requests may run concurrently on separate calls.

use tracing::{info, warn};

use crate::document::{CustomSection, GenerationRequest, StructuredDocument};
use crate::error::PipelineError;
use crate::llm::client::LlmClient;
use crate::ops;
use crate::repo::{PlaceholderSource, RepoContentSource};

/// Assembly value for the field the URL/code chain does not produce.
pub const FOLDER_STRUCTURE_PLACEHOLDER: &str =
    "Folder structure is not specified for this input.";

/// Stand-in repository URL when the chain runs on raw code content.
const CODE_INPUT_URL: &str = "(code input; no repository URL)";

pub struct Orchestrator {
    client: Box<dyn LlmClient>,
    repo_source: Box<dyn RepoContentSource>,
}

/// Wrap an operation failure as a step failure, letting input validation
/// errors surface unwrapped: those are caller mistakes, not step outcomes.
fn wrap_step(message: &str, err: PipelineError) -> PipelineError {
    match err {
        PipelineError::Validation(_) => err,
        other => PipelineError::step(message, other),
    }
}

impl Orchestrator {
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self {
            client,
            repo_source: Box::new(PlaceholderSource),
        }
    }

    pub fn with_repo_source(mut self, source: Box<dyn RepoContentSource>) -> Self {
        self.repo_source = source;
        self
    }

    /// Dispatch a request to the workflow its mode selects. The request is
    /// consumed; nothing about it is retained across calls.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<StructuredDocument, PipelineError> {
        match request {
            GenerationRequest::Url { repo_url } => {
                self.generate_from_repository(&repo_url).await
            }
            GenerationRequest::Code { code_content } => {
                self.generate_from_code(&code_content).await
            }
            GenerationRequest::Prompt { user_prompt } => {
                self.generate_from_freeform_prompt(&user_prompt).await
            }
            GenerationRequest::Expand { current } => self.expand_document(&current).await,
        }
    }

    /// URL-based generation: summarize → suggest name → generate sections.
    pub async fn generate_from_repository(
        &self,
        repo_url: &str,
    ) -> Result<StructuredDocument, PipelineError> {
        if repo_url.trim().is_empty() {
            return Err(PipelineError::validation("repository URL must not be empty"));
        }
        self.run_source_chain(repo_url, repo_url).await
    }

    /// Code-based generation: the same chain, summarizing raw code content.
    pub async fn generate_from_code(
        &self,
        code_content: &str,
    ) -> Result<StructuredDocument, PipelineError> {
        if code_content.trim().is_empty() {
            return Err(PipelineError::validation("code content must not be empty"));
        }
        self.run_source_chain(code_content, CODE_INPUT_URL).await
    }

    async fn run_source_chain(
        &self,
        source_content: &str,
        repo_url: &str,
    ) -> Result<StructuredDocument, PipelineError> {
        info!("Step 1: summarizing input");
        let description = ops::summarize_input(self.client.as_ref(), source_content)
            .await
            .map_err(|e| wrap_step("Failed to summarize repository.", e))?;

        // Languages and file contents come from the repository source;
        // the default supplies fixed placeholders.
        let content = self.repo_source.fetch(repo_url).await?;

        info!("Step 2: suggesting a project name");
        let project_name =
            ops::suggest_name(self.client.as_ref(), &description, &content.languages)
                .await
                .map_err(|e| wrap_step("Failed to suggest a project name.", e))?;

        info!("Step 3: generating README sections");
        let sections = ops::generate_sections(
            self.client.as_ref(),
            repo_url,
            &content.file_contents,
            &project_name,
        )
        .await
        .map_err(|e| wrap_step("Failed to generate README sections.", e))?;

        info!("Pipeline complete: assembled document for '{}'", project_name);
        Ok(StructuredDocument {
            project_name,
            project_description: description,
            features: sections.features,
            technologies_used: sections.technologies_used,
            setup_instructions: sections.setup_instructions,
            folder_structure: FOLDER_STRUCTURE_PLACEHOLDER.to_string(),
        })
    }

    /// Prompt-based generation: one call produces the whole document.
    pub async fn generate_from_freeform_prompt(
        &self,
        user_prompt: &str,
    ) -> Result<StructuredDocument, PipelineError> {
        info!("Generating full document from prompt");
        ops::generate_from_prompt(self.client.as_ref(), user_prompt)
            .await
            .map_err(|e| wrap_step("AI failed to generate README content from the prompt.", e))
    }

    /// Expansion: all six fields are replaced by the model's output. There
    /// is no field-by-field fallback; expansion is all-or-nothing.
    pub async fn expand_document(
        &self,
        current: &StructuredDocument,
    ) -> Result<StructuredDocument, PipelineError> {
        info!("Expanding document '{}'", current.project_name);
        let expanded = ops::generate_detailed_expansion(self.client.as_ref(), current)
            .await
            .map_err(|e| wrap_step("AI failed to generate detailed README content.", e))?;

        // Identity preservation and monotonic growth are model-side
        // instructions; a schema-valid output is authoritative, but drift
        // is worth surfacing in the logs.
        if expanded.project_name != current.project_name {
            warn!(
                "expansion changed the project name: '{}' -> '{}'",
                current.project_name, expanded.project_name
            );
        }
        for (field, before, after) in [
            ("features", &current.features, &expanded.features),
            (
                "setupInstructions",
                &current.setup_instructions,
                &expanded.setup_instructions,
            ),
            (
                "folderStructure",
                &current.folder_structure,
                &expanded.folder_structure,
            ),
        ] {
            if after.len() < before.len() {
                warn!("expansion shrank field '{}'", field);
            }
        }

        Ok(expanded)
    }

    /// Explain a code snippet at a beginner or technical level.
    pub async fn explain_code(&self, code: &str, level: &str) -> Result<String, PipelineError> {
        ops::explain_snippet(self.client.as_ref(), code, level).await
    }

    /// Generate one custom README section from a free-text request.
    pub async fn generate_custom_section(
        &self,
        user_prompt: &str,
    ) -> Result<CustomSection, PipelineError> {
        ops::generate_custom_section(self.client.as_ref(), user_prompt).await
    }
}
