//! Schema registry primitives.
//!
//! Every generation operation declares its input and output as a set of
//! named fields with a semantic kind and a human-readable description. The
//! same declaration drives prompt construction and response validation, so
//! the two can never drift apart: a field added to an output schema without
//! a matching template instruction shows up as a failing contract check, not
//! as silently missing content.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::PipelineError;

/// Named input values for one operation invocation, keyed by schema field name.
pub type FieldValues = BTreeMap<&'static str, String>;

/// Semantic kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; may contain Markdown.
    Text,
    /// Closed enumeration over the listed values.
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn text(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            description,
        }
    }

    pub const fn choice(
        name: &'static str,
        choices: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind: FieldKind::Choice(choices),
            description,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Validate caller-supplied input values. Missing or empty required
    /// fields and out-of-range choices fail here, before any model call.
    pub fn validate_values(&self, values: &FieldValues) -> Result<(), String> {
        for field in self.fields {
            let value = match values.get(field.name) {
                Some(v) if !v.trim().is_empty() => v,
                _ => return Err(format!("missing required field: {}", field.name)),
            };
            if let FieldKind::Choice(choices) = field.kind {
                if !choices.contains(&value.as_str()) {
                    return Err(format!(
                        "invalid value '{}' for field {}: must be one of: {}",
                        value,
                        field.name,
                        choices.join(", ")
                    ));
                }
            }
        }
        Ok(())
    }

    /// Validate a parsed model response against this schema. Every declared
    /// field must be present as a non-empty string; choice fields must hold
    /// one of their listed values. Returns the extracted field map on
    /// success. Any violation fails the operation as a whole; there is no
    /// partial acceptance of a malformed structured response.
    pub fn validate_response(&self, response: &Value) -> Result<FieldValues, String> {
        let object = response
            .as_object()
            .ok_or_else(|| "response is not a JSON object".to_string())?;

        let mut extracted = FieldValues::new();
        for field in self.fields {
            let value = object
                .get(field.name)
                .ok_or_else(|| format!("missing field: {}", field.name))?;
            let text = value
                .as_str()
                .ok_or_else(|| format!("field {} is not a string", field.name))?;
            if text.trim().is_empty() {
                return Err(format!("field {} is empty", field.name));
            }
            if let FieldKind::Choice(choices) = field.kind {
                if !choices.contains(&text) {
                    return Err(format!(
                        "field {} holds '{}', expected one of: {}",
                        field.name,
                        text,
                        choices.join(", ")
                    ));
                }
            }
            extracted.insert(field.name, text.to_string());
        }
        Ok(extracted)
    }
}

/// The typed contract of one generation operation: input shape, output
/// shape, and the template that binds input fields into instruction text.
pub struct OperationContract {
    pub name: &'static str,
    pub input: Schema,
    pub output: Schema,
    render: fn(&FieldValues) -> String,
}

impl OperationContract {
    /// Build a contract, verifying that every declared input field has a
    /// placeholder in the template. The check renders the template with
    /// sentinel values and asserts each sentinel survives into the output,
    /// turning a missing placeholder into a startup failure instead of a
    /// runtime surprise.
    pub fn new(
        name: &'static str,
        input: Schema,
        output: Schema,
        render: fn(&FieldValues) -> String,
    ) -> Self {
        let mut sentinels = FieldValues::new();
        for field in input.fields {
            sentinels.insert(field.name, format!("<<sentinel:{}>>", field.name));
        }
        let rendered = render(&sentinels);
        for field in input.fields {
            assert!(
                rendered.contains(&format!("<<sentinel:{}>>", field.name)),
                "operation '{}': input field '{}' has no placeholder in its template",
                name,
                field.name
            );
        }
        Self {
            name,
            input,
            output,
            render,
        }
    }

    /// Validate input values against the input schema and render the final
    /// instruction text. Fails fast with a `Validation` error so no model
    /// invocation is wasted on malformed input.
    pub fn render_prompt(&self, values: &FieldValues) -> Result<String, PipelineError> {
        self.input
            .validate_values(values)
            .map_err(|detail| PipelineError::validation(format!("{}: {}", self.name, detail)))?;
        Ok((self.render)(values))
    }
}

/// Fetch a field from rendered input values. Templates are only invoked
/// after input validation (or with full sentinel maps), so a missing name
/// renders as empty rather than panicking.
pub fn field<'a>(values: &'a FieldValues, name: &str) -> &'a str {
    values.get(name).map(String::as_str).unwrap_or_default()
}
