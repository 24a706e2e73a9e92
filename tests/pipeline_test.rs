//! Workflow-level tests driving the orchestrator with a scripted client:
//! chain ordering, short-circuiting, exact failure messages, and assembly.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use readmegen::document::{GenerationRequest, StructuredDocument};
use readmegen::error::PipelineError;
use readmegen::llm::client::{LlmClient, MockLlmClient};
use readmegen::pipeline::{Orchestrator, FOLDER_STRUCTURE_PLACEHOLDER};

enum Reply {
    Ok(String),
    Fail,
}

fn ok(body: &str) -> Reply {
    Reply::Ok(body.to_string())
}

/// Replays a fixed queue of responses and records every prompt it receives,
/// so tests can assert both what was asked and that nothing was asked after
/// a failure.
struct ScriptedClient {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn prompt(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Ok(body)) => Ok(body),
            Some(Reply::Fail) => bail!("model runtime unreachable"),
            None => bail!("no scripted reply left"),
        }
    }
}

fn scripted(replies: Vec<Reply>) -> (Orchestrator, std::sync::Arc<ScriptedClient>) {
    let client = std::sync::Arc::new(ScriptedClient::new(replies));

    struct Shared(std::sync::Arc<ScriptedClient>);
    #[async_trait]
    impl LlmClient for Shared {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.0.complete(prompt).await
        }
    }

    (
        Orchestrator::new(Box::new(Shared(client.clone()))),
        client,
    )
}

const SUMMARY_REPLY: &str = r#"{"summary": "A tool that converts CSV files to JSON."}"#;
const NAME_REPLY: &str = r#"{"projectName": "csv2json"}"#;
const SECTIONS_REPLY: &str = r#"{
  "features": "- Converts CSV to JSON",
  "technologiesUsed": "- Rust",
  "setupInstructions": "1. Install\n2. Run"
}"#;

fn sample_document() -> StructuredDocument {
    StructuredDocument {
        project_name: "csv2json".to_string(),
        project_description: "Converts CSV to JSON.".to_string(),
        features: "- fast".to_string(),
        technologies_used: "- Rust".to_string(),
        setup_instructions: "1. install".to_string(),
        folder_structure: "```\nsrc/\n```".to_string(),
    }
}

#[tokio::test]
async fn url_chain_assembles_document_from_step_outputs() {
    let (orchestrator, client) = scripted(vec![
        ok(SUMMARY_REPLY),
        ok(NAME_REPLY),
        ok(SECTIONS_REPLY),
    ]);

    let doc = orchestrator
        .generate(GenerationRequest::Url {
            repo_url: "https://github.com/acme/csv2json".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(doc.project_name, "csv2json");
    assert_eq!(doc.project_description, "A tool that converts CSV files to JSON.");
    assert_eq!(doc.features, "- Converts CSV to JSON");
    assert_eq!(doc.technologies_used, "- Rust");
    assert_eq!(doc.setup_instructions, "1. Install\n2. Run");
    assert_eq!(doc.folder_structure, FOLDER_STRUCTURE_PLACEHOLDER);
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn url_chain_threads_earlier_outputs_into_later_prompts() {
    let (orchestrator, client) = scripted(vec![
        ok(SUMMARY_REPLY),
        ok(NAME_REPLY),
        ok(SECTIONS_REPLY),
    ]);

    orchestrator
        .generate_from_repository("https://github.com/acme/csv2json")
        .await
        .unwrap();

    // The summary feeds the naming prompt; the name feeds the sections prompt.
    assert!(client.prompt(1).contains("A tool that converts CSV files to JSON."));
    assert!(client.prompt(2).contains("csv2json"));
    assert!(client.prompt(2).contains("https://github.com/acme/csv2json"));
}

#[tokio::test]
async fn summarize_failure_stops_the_chain() {
    let (orchestrator, client) = scripted(vec![Reply::Fail]);

    let err = orchestrator
        .generate_from_repository("https://github.com/acme/csv2json")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to summarize repository.");
    // No suggest-name or generate-sections call happened after the failure.
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn suggest_name_failure_names_the_right_step() {
    let (orchestrator, client) = scripted(vec![ok(SUMMARY_REPLY), Reply::Fail]);

    let err = orchestrator
        .generate_from_repository("https://github.com/acme/csv2json")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to suggest a project name.");
    assert!(!err.to_string().contains("summarize"));
    // generate-sections was never invoked.
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn sections_failure_names_the_right_step() {
    let (orchestrator, _client) = scripted(vec![
        ok(SUMMARY_REPLY),
        ok(NAME_REPLY),
        Reply::Fail,
    ]);

    let err = orchestrator
        .generate_from_repository("https://github.com/acme/csv2json")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to generate README sections.");
}

#[tokio::test]
async fn malformed_step_response_fails_the_whole_pipeline() {
    // suggest-name returns JSON missing its declared output field
    let (orchestrator, client) = scripted(vec![
        ok(SUMMARY_REPLY),
        ok(r#"{"name": "wrong field"}"#),
    ]);

    let err = orchestrator
        .generate_from_repository("https://github.com/acme/csv2json")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to suggest a project name.");
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn code_chain_summarizes_the_code_content() {
    let (orchestrator, client) = scripted(vec![
        ok(SUMMARY_REPLY),
        ok(NAME_REPLY),
        ok(SECTIONS_REPLY),
    ]);

    let doc = orchestrator
        .generate_from_code("fn main() { println!(\"csv\"); }")
        .await
        .unwrap();

    assert!(client.prompt(0).contains("fn main() { println!(\"csv\"); }"));
    assert_eq!(doc.folder_structure, FOLDER_STRUCTURE_PLACEHOLDER);
}

#[tokio::test]
async fn prompt_workflow_failure_message() {
    let (orchestrator, _client) = scripted(vec![Reply::Fail]);

    let err = orchestrator
        .generate_from_freeform_prompt("A CLI tool that converts CSV to JSON")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "AI failed to generate README content from the prompt."
    );
}

#[tokio::test]
async fn prompt_workflow_is_idempotent_with_deterministic_model() {
    let orchestrator_a = Orchestrator::new(Box::new(MockLlmClient::new()));
    let orchestrator_b = Orchestrator::new(Box::new(MockLlmClient::new()));

    let prompt = "A CLI tool that converts CSV to JSON";
    let a = orchestrator_a.generate_from_freeform_prompt(prompt).await.unwrap();
    let b = orchestrator_b.generate_from_freeform_prompt(prompt).await.unwrap();

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[tokio::test]
async fn prompt_without_named_technology_yields_literal_sentence() {
    let orchestrator = Orchestrator::new(Box::new(MockLlmClient::new()));
    let doc = orchestrator
        .generate_from_freeform_prompt("A CLI tool that converts CSV to JSON")
        .await
        .unwrap();

    assert_eq!(
        doc.technologies_used,
        "Technologies are not specified in the prompt."
    );
}

#[tokio::test]
async fn expansion_replaces_all_six_fields() {
    const EXPANDED_REPLY: &str = r#"{
  "projectName": "csv2json",
  "projectDescription": "A richer description of the converter.",
  "features": "- fast\n- streaming\n- type inference",
  "technologiesUsed": "- Rust\n- serde",
  "setupInstructions": "1. install\n2. configure\n3. run",
  "folderStructure": "```\ncsv2json/\n├── src/\n└── tests/\n```"
}"#;
    let (orchestrator, _client) = scripted(vec![ok(EXPANDED_REPLY)]);

    let current = sample_document();
    let expanded = orchestrator.expand_document(&current).await.unwrap();

    assert_eq!(expanded.project_name, "csv2json");
    assert_eq!(expanded.features, "- fast\n- streaming\n- type inference");

    // Same six field names in, same six field names out.
    let before = serde_json::to_value(&current).unwrap();
    let after = serde_json::to_value(&expanded).unwrap();
    let keys = |v: &serde_json::Value| -> Vec<String> {
        v.as_object().unwrap().keys().cloned().collect()
    };
    assert_eq!(keys(&before), keys(&after));
    assert_eq!(keys(&after).len(), 6);
}

#[tokio::test]
async fn expansion_is_all_or_nothing() {
    // A response dropping one field fails the whole expansion; no fallback
    // to old values for the fields the model did produce.
    const PARTIAL_REPLY: &str = r#"{
  "projectName": "csv2json",
  "projectDescription": "desc",
  "features": "- f",
  "technologiesUsed": "- t",
  "setupInstructions": "1. s"
}"#;
    let (orchestrator, _client) = scripted(vec![ok(PARTIAL_REPLY)]);

    let err = orchestrator.expand_document(&sample_document()).await.unwrap_err();
    assert_eq!(err.to_string(), "AI failed to generate detailed README content.");
}

#[tokio::test]
async fn expansion_failure_message() {
    let (orchestrator, _client) = scripted(vec![Reply::Fail]);
    let err = orchestrator.expand_document(&sample_document()).await.unwrap_err();
    assert_eq!(err.to_string(), "AI failed to generate detailed README content.");
}

#[tokio::test]
async fn explain_rejects_bad_level_before_any_model_call() {
    let (orchestrator, client) = scripted(vec![ok(r#"{"explanation": "x"}"#)]);

    let err = orchestrator
        .explain_code("fn main() {}", "expert")
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Validation(_)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn explain_empty_response_names_the_operation() {
    let (orchestrator, _client) = scripted(vec![ok("")]);

    let err = orchestrator
        .explain_code("fn main() {}", "technical")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "AI failed to generate an explanation for the code."
    );
}

#[tokio::test]
async fn fenced_json_responses_are_accepted() {
    let (orchestrator, _client) = scripted(vec![ok(
        "```json\n{\"explanation\": \"Reads input and writes output.\"}\n```",
    )]);

    let explanation = orchestrator
        .explain_code("fn main() {}", "beginner")
        .await
        .unwrap();
    assert_eq!(explanation, "Reads input and writes output.");
}

#[tokio::test]
async fn custom_section_title_is_normalized_to_level_2() {
    for (returned, expected) in [
        (r#"{"sectionTitle": "Contributing", "sectionDescription": "body"}"#, "## Contributing"),
        (r###"{"sectionTitle": "# Contributing", "sectionDescription": "body"}"###, "## Contributing"),
        (r###"{"sectionTitle": "## Contributing", "sectionDescription": "body"}"###, "## Contributing"),
    ] {
        let (orchestrator, _client) = scripted(vec![ok(returned)]);
        let section = orchestrator
            .generate_custom_section("add a contributing section")
            .await
            .unwrap();
        assert_eq!(section.section_title, expected);
        assert_eq!(section.section_description, "body");
    }
}

#[tokio::test]
async fn prose_response_is_a_schema_violation_not_a_success() {
    let (orchestrator, _client) = scripted(vec![ok(
        "Sure! Here is an explanation of your code: it prints a line.",
    )]);

    let err = orchestrator
        .explain_code("fn main() {}", "beginner")
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::SchemaViolation { .. }));
}
