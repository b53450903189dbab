//! Unified error types for promptd.
//!
//! Defines [`PromptdError`] (the main crate error enum) and
//! [`ValidationError`] for prompts-file validation findings. Both use
//! `thiserror` for `Display` and `Error` derives. Error messages
//! include contextual hints to guide the user toward a fix.
//!
//! The loading pipeline keeps its failure stages distinct so callers
//! can tell them apart: a missing file ([`PromptdError::PromptsFileNotFound`]),
//! an unreadable or malformed document ([`PromptdError::Io`],
//! [`PromptdError::PromptsParse`]), a missing key
//! ([`PromptdError::KeyNotFound`]), and a template that does not
//! compile ([`PromptdError::TemplateSyntax`]).

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub prompt: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  prompt {}: {}", self.prompt, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn format_errors(errors: &[ValidationError]) -> String {
    use std::fmt::Write;
    let mut buf = String::new();
    for (i, e) in errors.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        // write! to String is infallible (only fails on OOM which is unrecoverable)
        let _ = write!(buf, "{e}");
    }
    buf
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PromptdError {
    #[error("No prompts file found.\n\n  {hint}")]
    NoPromptsFile { hint: String },

    #[error("Prompts file not found: {}", path.display())]
    PromptsFileNotFound { path: PathBuf },

    #[error("Failed to parse {path}:\n  {source}")]
    PromptsParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Prompt key not found: '{key}' in {}", path.display())]
    KeyNotFound { key: String, path: PathBuf },

    #[error("Invalid template syntax in prompt '{name}': {source}")]
    TemplateSyntax {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to render prompt '{name}': {source}")]
    TemplateRender {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Prompts validation failed:\n{}", format_errors(.errors))]
    PromptsValidation { errors: Vec<ValidationError> },

    #[error("Invalid variable binding '{0}' (expected KEY=VALUE)")]
    InvalidVariable(String),

    #[error("File already exists: {}", path.display())]
    FileExists { path: PathBuf },

    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
