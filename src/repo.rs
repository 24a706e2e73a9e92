//! Repository content source: the seam between the pipeline and real
//! repository fetching.
//!
//! The URL/code workflow needs a languages list (for suggest-name) and a
//! file-contents body (for generate-sections). Real enumeration of a
//! repository is an external collaborator; the default implementation
//! supplies fixed placeholder values. A real fetcher behind this trait would
//! own its truncation limits and rate limiting.

use async_trait::async_trait;

use crate::error::PipelineError;

/// Content a repository source supplies to the generation chain.
#[derive(Debug, Clone)]
pub struct RepoContent {
    /// Languages used, as display text (e.g. "TypeScript, JavaScript").
    pub languages: String,
    /// Concatenated source text, bounded by the implementation's own limit.
    pub file_contents: String,
}

#[async_trait]
pub trait RepoContentSource: Send + Sync {
    async fn fetch(&self, repo_url: &str) -> Result<RepoContent, PipelineError>;
}

/// Fixed placeholder content used in the absence of real language detection
/// and file retrieval.
pub struct PlaceholderSource;

pub const PLACEHOLDER_LANGUAGES: &str = "JavaScript, TypeScript";
pub const PLACEHOLDER_FILE_CONTENTS: &str =
    "File contents are not available. Infer the project from its repository URL and name.";

#[async_trait]
impl RepoContentSource for PlaceholderSource {
    async fn fetch(&self, _repo_url: &str) -> Result<RepoContent, PipelineError> {
        Ok(RepoContent {
            languages: PLACEHOLDER_LANGUAGES.to_string(),
            file_contents: PLACEHOLDER_FILE_CONTENTS.to_string(),
        })
    }
}
