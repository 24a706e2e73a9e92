//! Prompt templates, one per generation operation.
//!
//! Each template is a pure function of its inputs: the same field values
//! always render the same instruction text. Inputs are embedded verbatim,
//! and every template states its own output-formatting rules and its policy
//! for ambiguous or missing information so downstream consumers never have
//! to infer structure or second-guess invented content.

pub fn summarize_input(source_content: &str) -> String {
    format!(
        r#"You are summarizing a software project so the summary can serve as its README description.

The input below is either a repository URL or raw code content. If it is a URL,
infer what the project is from the URL itself (owner, repository name, path).
If it is code, describe what the code actually does.

Rules:
- 2-4 sentences of plain prose. No headings, no lists, no code fences.
- Describe purpose and behavior only. Do not speculate about features the
  input does not imply.
- If the input is too ambiguous to summarize, state what kind of project it
  appears to be rather than inventing specifics.

Return ONLY a JSON object with this exact shape, no surrounding text:
{{
  "summary": "the project summary"
}}

Input:
{}
"#,
        source_content
    )
}

pub fn suggest_name(description: &str, languages: &str) -> String {
    format!(
        r#"You are naming a software project.

PROJECT DESCRIPTION:
{}

LANGUAGES USED:
{}

Rules:
- Suggest exactly one concise project name (1-3 words).
- Prefer a name grounded in what the project does, not the languages.
- No punctuation other than hyphens. No "App"/"Project" filler suffixes.

Return ONLY a JSON object with this exact shape, no surrounding text:
{{
  "projectName": "the suggested name"
}}
"#,
        description, languages
    )
}

pub fn generate_sections(repo_url: &str, file_contents: &str, project_name: &str) -> String {
    format!(
        r#"You are writing README sections for the project "{}".

REPOSITORY URL:
{}

FILE CONTENTS:
{}

Generate the Features, Technologies Used, and Setup Instructions sections.

Formatting rules:
- "features": a Markdown bullet list, one "- " item per feature.
- "technologiesUsed": a Markdown bullet list of technologies, one per line.
- "setupInstructions": a Markdown numbered list of steps (1. 2. 3.),
  with shell commands in fenced code blocks where helpful.
- Do not include any headings inside field values; headings are added by the
  renderer.

Content rules:
- Do not invent technologies that are not implied by the repository URL or
  file contents. If no technology is identifiable, say so plainly instead of
  guessing a plausible stack.
- Keep features factual; no marketing language.

Return ONLY a JSON object with this exact shape, no surrounding text:
{{
  "features": "...",
  "technologiesUsed": "...",
  "setupInstructions": "..."
}}
"#,
        project_name, repo_url, file_contents
    )
}

pub fn generate_from_prompt(user_prompt: &str) -> String {
    format!(
        r#"You are writing a complete README document from this project idea:

{}

Produce all six fields of the document in one pass.

Formatting rules:
- "projectName": a concise name (1-3 words), no heading markers.
- "projectDescription": 2-4 sentences of plain prose.
- "features": a Markdown bullet list, one "- " item per feature.
- "technologiesUsed": a Markdown bullet list of technologies.
- "setupInstructions": a Markdown numbered list of steps (1. 2. 3.).
- "folderStructure": a plausible folder tree inside a fenced code block.
- Do not include any headings inside field values.

Content rules:
- Derive everything from the prompt. Do not invent requirements the prompt
  does not imply.
- If the prompt does not name any technology, set "technologiesUsed" to
  exactly this sentence: Technologies are not specified in the prompt.
  Never guess a plausible stack.

Return ONLY a JSON object with this exact shape, no surrounding text:
{{
  "projectName": "...",
  "projectDescription": "...",
  "features": "...",
  "technologiesUsed": "...",
  "setupInstructions": "...",
  "folderStructure": "..."
}}
"#,
        user_prompt
    )
}

pub fn generate_custom_section(user_prompt: &str) -> String {
    format!(
        r###"You are writing a single custom README section from this request:

{}

Rules:
- "sectionTitle" must be a level-2 Markdown heading: "## Title".
- "sectionDescription" is the section body: prose, bullet lists, or fenced
  code blocks as appropriate. No headings inside the body.
- Stay within the scope of the request; do not add unrelated content.

Return ONLY a JSON object with this exact shape, no surrounding text:
{{
  "sectionTitle": "## ...",
  "sectionDescription": "..."
}}
"###,
        user_prompt
    )
}

#[allow(clippy::too_many_arguments)]
pub fn generate_detailed_expansion(
    project_name: &str,
    project_description: &str,
    current_features: &str,
    current_technologies_used: &str,
    current_setup_instructions: &str,
    current_folder_structure: &str,
) -> String {
    format!(
        r#"You are expanding an existing README document into a more detailed version.

CURRENT DOCUMENT:
projectName: {}
projectDescription: {}
features: {}
technologiesUsed: {}
setupInstructions: {}
folderStructure: {}

Rules:
- Every field in your output must be equal in scope or richer than the
  corresponding current field. Never drop information that is already there.
- Keep the project name the same unless a subtle refinement is clearly warranted.
- Keep the same formatting conventions: bullet lists for features and
  technologies, numbered steps for setup, a fenced code block for the
  folder structure, no headings inside field values.
- Expand with detail grounded in the current content; do not invent
  unrelated capabilities or technologies.

Return ONLY a JSON object with this exact shape, no surrounding text:
{{
  "projectName": "...",
  "projectDescription": "...",
  "features": "...",
  "technologiesUsed": "...",
  "setupInstructions": "...",
  "folderStructure": "..."
}}
"#,
        project_name,
        project_description,
        current_features,
        current_technologies_used,
        current_setup_instructions,
        current_folder_structure
    )
}

pub fn explain_snippet(code: &str, level: &str) -> String {
    format!(
        r#"Explain the following code for a {} audience.

Rules for level "beginner": plain language, explain what the code does step
by step, avoid jargon or define it when unavoidable.
Rules for level "technical": precise terminology, cover control flow, data
structures, and complexity or performance characteristics where relevant.

- The explanation is Markdown prose; short inline code references are fine.
- Explain only the code given. Do not guess at code outside the snippet.

Return ONLY a JSON object with this exact shape, no surrounding text:
{{
  "explanation": "the explanation"
}}

Code:
{}
"#,
        level, code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_embed_inputs_verbatim() {
        let prompt = summarize_input("https://github.com/acme/csv2json");
        assert!(prompt.contains("https://github.com/acme/csv2json"));

        let prompt = suggest_name("converts CSV to JSON", "Rust");
        assert!(prompt.contains("converts CSV to JSON"));
        assert!(prompt.contains("Rust"));

        let prompt = explain_snippet("fn main() {}", "technical");
        assert!(prompt.contains("fn main() {}"));
        assert!(prompt.contains("technical audience"));
    }

    #[test]
    fn test_templates_are_deterministic() {
        let a = generate_from_prompt("A CLI tool that converts CSV to JSON");
        let b = generate_from_prompt("A CLI tool that converts CSV to JSON");
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_prompt_states_no_guessing_policy() {
        let prompt = generate_from_prompt("some idea");
        assert!(prompt.contains("Technologies are not specified in the prompt."));
        assert!(prompt.contains("Never guess a plausible stack."));
    }

    #[test]
    fn test_sections_states_no_invention_policy() {
        let prompt = generate_sections("https://example.com", "(none)", "csv2json");
        assert!(prompt.contains("Do not invent technologies"));
    }

    #[test]
    fn test_expansion_states_name_preservation() {
        let prompt = generate_detailed_expansion("n", "d", "f", "t", "s", "fs");
        assert!(prompt.contains("Keep the project name the same"));
        assert!(prompt.contains("subtle refinement is clearly warranted"));
    }

    #[test]
    fn test_custom_section_requires_level_2_heading() {
        let prompt = generate_custom_section("add a contributing section");
        assert!(prompt.contains(r#""sectionTitle" must be a level-2 Markdown heading"#));
        assert!(prompt.contains(r###""## ...""###));
    }
}
