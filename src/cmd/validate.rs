//! `promptd validate` — check a prompts file for errors.
//!
//! Parses the file and compiles every template, reporting results in
//! either human-readable text or machine-readable JSON format.

use crate::cli::{ValidateArgs, ValidateFormat};
use crate::error::PromptdError;
use crate::prompts::loader::parse_prompts_str;
use crate::prompts::validation;

pub fn execute(args: &ValidateArgs) -> Result<(), PromptdError> {
    let path = &args.prompts;

    if !path.exists() {
        return Err(PromptdError::PromptsFileNotFound { path: path.clone() });
    }

    let content = std::fs::read_to_string(path)?;
    let file = parse_prompts_str(&content, &path.display().to_string())?;

    if let Err(errors) = validation::validate(&file) {
        match args.format {
            ValidateFormat::Text => {
                eprintln!("\u{2717} {} has {} errors\n", path.display(), errors.len());
                for error in &errors {
                    eprintln!("{error}");
                }
            }
            ValidateFormat::Json => {
                let json_errors: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "prompt": e.prompt,
                            "message": e.message,
                            "suggestion": e.suggestion,
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "valid": false,
                        "errors": json_errors,
                    })
                );
            }
        }
        return Err(PromptdError::PromptsValidation { errors });
    }

    match args.format {
        ValidateFormat::Text => {
            println!(
                "\u{2713} {}",
                validation::format_validation_report(&path.display().to_string(), &file)
            );
        }
        ValidateFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "valid": true,
                    "count": file.count(),
                    "prompts": file.names(),
                })
            );
        }
    }

    Ok(())
}
