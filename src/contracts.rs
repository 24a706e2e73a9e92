//! The operation contract registry: the single source of truth for every
//! operation's input and output field sets.
//!
//! Prompt rendering and response validation both derive from the schemas
//! declared here. Contract construction verifies that each input field has
//! a placeholder in its template, so a schema/template mismatch fails the
//! first time the contract is touched.

use once_cell::sync::Lazy;

use crate::prompts;
use crate::schema::{field, FieldSpec, OperationContract, Schema};

/// The six-field StructuredDocument output shape, shared by the one-shot
/// prompt operation and the detailed expansion.
const DOCUMENT_SCHEMA: Schema = Schema::new(&[
    FieldSpec::text("projectName", "short project name"),
    FieldSpec::text("projectDescription", "prose description, may contain Markdown"),
    FieldSpec::text("features", "Markdown bullet list of features"),
    FieldSpec::text("technologiesUsed", "Markdown bullet list of technologies"),
    FieldSpec::text("setupInstructions", "Markdown numbered setup steps"),
    FieldSpec::text("folderStructure", "folder tree in a fenced code block"),
]);

const SUMMARIZE_IN: Schema = Schema::new(&[FieldSpec::text(
    "sourceContent",
    "repository URL or raw code content to summarize",
)]);
const SUMMARIZE_OUT: Schema = Schema::new(&[FieldSpec::text(
    "summary",
    "prose summary used as the project description",
)]);

const SUGGEST_NAME_IN: Schema = Schema::new(&[
    FieldSpec::text("description", "what the project does"),
    FieldSpec::text("languages", "languages used, as text"),
]);
const SUGGEST_NAME_OUT: Schema =
    Schema::new(&[FieldSpec::text("projectName", "the suggested project name")]);

const SECTIONS_IN: Schema = Schema::new(&[
    FieldSpec::text("repoUrl", "the repository URL"),
    FieldSpec::text("fileContents", "concatenated source text of the repository"),
    FieldSpec::text("projectName", "the resolved project name"),
]);
const SECTIONS_OUT: Schema = Schema::new(&[
    FieldSpec::text("features", "Markdown bullet list of features"),
    FieldSpec::text("technologiesUsed", "Markdown bullet list of technologies"),
    FieldSpec::text("setupInstructions", "Markdown numbered setup steps"),
]);

const FROM_PROMPT_IN: Schema = Schema::new(&[FieldSpec::text(
    "userPrompt",
    "free-text description of the project idea",
)]);

const CUSTOM_SECTION_IN: Schema = Schema::new(&[FieldSpec::text(
    "userPrompt",
    "free-text request for a custom README section",
)]);
const CUSTOM_SECTION_OUT: Schema = Schema::new(&[
    FieldSpec::text("sectionTitle", "level-2 Markdown heading for the section"),
    FieldSpec::text("sectionDescription", "the section body"),
]);

const EXPANSION_IN: Schema = Schema::new(&[
    FieldSpec::text("projectName", "the current project name"),
    FieldSpec::text("projectDescription", "the current description"),
    FieldSpec::text("currentFeatures", "the current features section"),
    FieldSpec::text("currentTechnologiesUsed", "the current technologies section"),
    FieldSpec::text("currentSetupInstructions", "the current setup section"),
    FieldSpec::text("currentFolderStructure", "the current folder structure"),
]);

const EXPLAIN_IN: Schema = Schema::new(&[
    FieldSpec::text("code", "the code to explain"),
    FieldSpec::choice(
        "level",
        &["beginner", "technical"],
        "audience level for the explanation",
    ),
]);
const EXPLAIN_OUT: Schema = Schema::new(&[FieldSpec::text(
    "explanation",
    "Markdown explanation of the code",
)]);

pub static SUMMARIZE_INPUT: Lazy<OperationContract> = Lazy::new(|| {
    OperationContract::new("summarize-input", SUMMARIZE_IN, SUMMARIZE_OUT, |v| {
        prompts::summarize_input(field(v, "sourceContent"))
    })
});

pub static SUGGEST_NAME: Lazy<OperationContract> = Lazy::new(|| {
    OperationContract::new("suggest-name", SUGGEST_NAME_IN, SUGGEST_NAME_OUT, |v| {
        prompts::suggest_name(field(v, "description"), field(v, "languages"))
    })
});

pub static GENERATE_SECTIONS: Lazy<OperationContract> = Lazy::new(|| {
    OperationContract::new("generate-sections", SECTIONS_IN, SECTIONS_OUT, |v| {
        prompts::generate_sections(
            field(v, "repoUrl"),
            field(v, "fileContents"),
            field(v, "projectName"),
        )
    })
});

pub static GENERATE_FROM_PROMPT: Lazy<OperationContract> = Lazy::new(|| {
    OperationContract::new("generate-from-prompt", FROM_PROMPT_IN, DOCUMENT_SCHEMA, |v| {
        prompts::generate_from_prompt(field(v, "userPrompt"))
    })
});

pub static GENERATE_CUSTOM_SECTION: Lazy<OperationContract> = Lazy::new(|| {
    OperationContract::new(
        "generate-custom-section",
        CUSTOM_SECTION_IN,
        CUSTOM_SECTION_OUT,
        |v| prompts::generate_custom_section(field(v, "userPrompt")),
    )
});

pub static GENERATE_DETAILED_EXPANSION: Lazy<OperationContract> = Lazy::new(|| {
    OperationContract::new(
        "generate-detailed-expansion",
        EXPANSION_IN,
        DOCUMENT_SCHEMA,
        |v| {
            prompts::generate_detailed_expansion(
                field(v, "projectName"),
                field(v, "projectDescription"),
                field(v, "currentFeatures"),
                field(v, "currentTechnologiesUsed"),
                field(v, "currentSetupInstructions"),
                field(v, "currentFolderStructure"),
            )
        },
    )
});

pub static EXPLAIN_SNIPPET: Lazy<OperationContract> = Lazy::new(|| {
    OperationContract::new("explain-snippet", EXPLAIN_IN, EXPLAIN_OUT, |v| {
        prompts::explain_snippet(field(v, "code"), field(v, "level"))
    })
});
