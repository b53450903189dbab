//! Prompt template loading from the YAML prompts file.
//!
//! The load pipeline is read, parse, lookup, compile, with a distinct
//! error kind at each stage and no caching anywhere: every call
//! re-reads the file, so on-disk edits take effect on the next load.
//! File I/O is synchronous; async callers bridge via `spawn_blocking`.

use std::path::Path;

use sha2::{Digest, Sha256};

use super::model::PromptsFile;
use super::template::PromptTemplate;
use crate::error::PromptdError;

/// Top-level key holding the prompt mapping.
pub const PROMPTS_KEY: &str = "prompts";

fn read_content(path: &Path) -> Result<String, PromptdError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PromptdError::PromptsFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PromptdError::Io(e)
        }
    })
}

/// Parse a prompts document from a string.
///
/// `path_display` only labels error messages.
pub fn parse_prompts_str(content: &str, path_display: &str) -> Result<PromptsFile, PromptdError> {
    serde_yml::from_str::<PromptsFile>(content).map_err(|e| PromptdError::PromptsParse {
        path: path_display.to_string(),
        source: Box::new(e),
    })
}

/// Read and parse the prompts file at `path`.
pub fn load_prompts(path: &Path) -> Result<PromptsFile, PromptdError> {
    let content = read_content(path)?;
    parse_prompts_str(&content, &path.display().to_string())
}

/// Read and parse the prompts file, also returning a SHA-256 content
/// hash usable as a version marker.
pub fn load_prompts_versioned(path: &Path) -> Result<(PromptsFile, String), PromptdError> {
    let content = read_content(path)?;
    let file = parse_prompts_str(&content, &path.display().to_string())?;
    let version = sha256_hex(content.as_bytes());
    Ok((file, version))
}

/// Load the template named `name` from the file at `path` and compile it.
///
/// Fails with [`PromptdError::PromptsFileNotFound`] or [`PromptdError::Io`]
/// before any parsing happens, [`PromptdError::PromptsParse`] on a
/// malformed document, [`PromptdError::KeyNotFound`] when either the
/// `prompts` mapping or the named entry is absent, and
/// [`PromptdError::TemplateSyntax`] when the entry does not compile.
pub fn load_template(path: &Path, name: &str) -> Result<PromptTemplate, PromptdError> {
    let file = load_prompts(path)?;

    let prompts = file
        .prompts
        .as_ref()
        .ok_or_else(|| PromptdError::KeyNotFound {
            key: PROMPTS_KEY.to_string(),
            path: path.to_path_buf(),
        })?;

    let source = prompts.get(name).ok_or_else(|| PromptdError::KeyNotFound {
        key: format!("{PROMPTS_KEY}.{name}"),
        path: path.to_path_buf(),
    })?;

    PromptTemplate::compile(name, source)
}

/// List the prompt names defined in the file at `path`, sorted.
pub fn list_prompts(path: &Path) -> Result<Vec<String>, PromptdError> {
    let file = load_prompts(path)?;
    match file.prompts {
        Some(prompts) => Ok(prompts.into_keys().collect()),
        None => Err(PromptdError::KeyNotFound {
            key: PROMPTS_KEY.to_string(),
            path: path.to_path_buf(),
        }),
    }
}

/// Lowercase hex-encoded SHA-256 digest.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}
