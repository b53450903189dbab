//! `promptd init` — generate a starter prompts file.
//!
//! Creates a YAML prompts file with either a minimal or a fully
//! documented template.

use std::path::PathBuf;

use crate::cli::InitArgs;
use crate::error::PromptdError;

pub fn execute(args: &InitArgs) -> Result<(), PromptdError> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("prompts.yaml"));

    if output.exists() {
        return Err(PromptdError::FileExists { path: output });
    }

    let content = if args.full { YAML_FULL } else { YAML_MINIMAL };

    std::fs::write(&output, content)?;
    println!("Created {}", output.display());
    Ok(())
}

const YAML_MINIMAL: &str = r#"# promptd prompts file

prompts:
  greeting: "Hello, {{ name }}!"
"#;

const YAML_FULL: &str = r#"# promptd prompts file
#
# Each entry under `prompts` maps a name to a template string.
# Placeholders use {{ variable }} syntax and are filled at render
# time; variables with no binding render as empty strings.

prompts:
  # Inline template
  greeting: "Hello, {{ name }}!"

  # Block scalar for multi-line templates
  summarize: |
    Summarize the following document in {{ max_words }} words or fewer.

    {{ document }}

  rag_answer: |
    You are a helpful assistant. Use only the context below to answer.

    Context:
    {{ context }}

    Question: {{ question }}

    Answer:
"#;
