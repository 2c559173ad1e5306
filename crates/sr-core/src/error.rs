use crate::types::SourceSpan;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct SeedError {
    pub code: String,
    pub message: String,
    pub span: Option<SourceSpan>,
    pub step: Option<String>,
}

impl SeedError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            span: None,
            step: None,
        }
    }

    pub fn with_span(
        code: impl Into<String>,
        message: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            span: Some(span),
            step: None,
        }
    }

    /// Wraps a failure raised while running the named seeding step.
    ///
    /// The original code and message are folded into the new message so the
    /// caller sees both which step failed and why.
    pub fn in_step(step: impl Into<String>, inner: SeedError) -> Self {
        let step = step.into();
        Self {
            code: "SEED_STEP_FAILED".to_string(),
            message: format!("Seeding step \"{}\" failed: {}", step, inner),
            span: inner.span,
            step: Some(step),
        }
    }
}
