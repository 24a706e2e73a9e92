//! Core data model: the structured README document and generation requests.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// The canonical output unit of every generation workflow.
///
/// All six fields are present and non-empty on any successful completion;
/// a missing field is a failure of the producing operation, never a partial
/// success. Field names serialize in camelCase to match the persisted JSON
/// shape consumed by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDocument {
    pub project_name: String,
    pub project_description: String,
    pub features: String,
    pub technologies_used: String,
    pub setup_instructions: String,
    pub folder_structure: String,
}

impl StructuredDocument {
    /// Render the document as a single Markdown README body.
    /// Section fields may themselves contain Markdown (lists, fenced blocks);
    /// they are embedded verbatim under `##` headings.
    pub fn to_markdown(&self) -> String {
        format!(
            "# {}\n\n{}\n\n## Features\n\n{}\n\n## Technologies Used\n\n{}\n\n## Setup Instructions\n\n{}\n\n## Folder Structure\n\n{}\n",
            self.project_name,
            self.project_description,
            self.features,
            self.technologies_used,
            self.setup_instructions,
            self.folder_structure,
        )
    }
}

/// One request to the pipeline. Exactly one input mode is active; the
/// orchestrator consumes the request once and does not retain it.
#[derive(Debug, Clone)]
pub enum GenerationRequest {
    /// Generate from a repository URL via the summarize → name → sections chain.
    Url { repo_url: String },
    /// Generate from raw code content via the same chain.
    Code { code_content: String },
    /// Generate the full document in one call from a free-text idea.
    Prompt { user_prompt: String },
    /// Expand an existing document into a more detailed version.
    Expand { current: StructuredDocument },
}

/// Output of the custom-section operation. `title` always carries exactly
/// one `## ` heading marker after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSection {
    pub section_title: String,
    pub section_description: String,
}

/// Audience level for the explain-snippet operation. Closed enumeration:
/// any other value is rejected at the input boundary before a model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplainLevel {
    Beginner,
    Technical,
}

impl ExplainLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Technical => "technical",
        }
    }
}

impl FromStr for ExplainLevel {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "technical" => Ok(Self::Technical),
            other => Err(PipelineError::validation(format!(
                "invalid explanation level '{}': must be one of: beginner, technical",
                other
            ))),
        }
    }
}
