use thiserror::Error;

/// Failure taxonomy for the generation pipeline.
///
/// Every public operation returns either a fully-populated success value or
/// one of these variants carrying a human-readable message. `Display` is the
/// message callers show to the end user, so step wrappers keep it verbatim.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Caller-supplied input failed its schema before any model call.
    #[error("{0}")]
    Validation(String),

    /// The model runtime could not be reached or returned nothing.
    #[error("{message}")]
    ModelInvocation {
        operation: &'static str,
        message: String,
    },

    /// The model returned a structurally invalid response.
    #[error("{operation}: model response does not match the output schema: {detail}")]
    SchemaViolation {
        operation: &'static str,
        detail: String,
    },

    /// A step of a multi-step workflow failed, terminating the pipeline.
    #[error("{message}")]
    Step {
        message: String,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    /// Wrap an operation failure as a named pipeline step failure.
    pub fn step(message: impl Into<String>, source: PipelineError) -> Self {
        Self::Step {
            message: message.into(),
            source: Box::new(source),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Name of the operation that failed, for errors that carry one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::ModelInvocation { operation, .. } | Self::SchemaViolation { operation, .. } => {
                Some(operation)
            }
            Self::Step { source, .. } => source.operation(),
            Self::Validation(_) => None,
        }
    }
}
