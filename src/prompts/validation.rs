//! Prompts-file validation with per-prompt findings.
//!
//! [`validate`] checks a parsed [`PromptsFile`] for structural
//! problems (missing or empty `prompts` mapping, empty names, blank
//! template bodies) and compiles every template so syntax errors are
//! reported together instead of one render at a time.

use super::model::PromptsFile;
use super::template::PromptTemplate;
use crate::error::{PromptdError, ValidationError};

pub fn validate(file: &PromptsFile) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let Some(prompts) = file.prompts.as_ref() else {
        errors.push(ValidationError {
            prompt: "(root)".into(),
            message: "missing top-level 'prompts' mapping".into(),
            suggestion: Some("add a 'prompts:' key mapping names to template strings".into()),
        });
        return Err(errors);
    };

    if prompts.is_empty() {
        errors.push(ValidationError {
            prompt: "(root)".into(),
            message: "at least one prompt must be defined".into(),
            suggestion: None,
        });
        return Err(errors);
    }

    for (name, source) in prompts {
        if name.is_empty() {
            errors.push(ValidationError {
                prompt: "(empty)".into(),
                message: "prompt name cannot be empty".into(),
                suggestion: None,
            });
            continue;
        }

        if source.trim().is_empty() {
            errors.push(ValidationError {
                prompt: name.clone(),
                message: "template is empty".into(),
                suggestion: None,
            });
            continue;
        }

        if let Err(e) = PromptTemplate::compile(name, source) {
            errors.push(ValidationError {
                prompt: name.clone(),
                message: template_error_message(&e),
                suggestion: Some("check for unclosed '{{' or '{{#' blocks".into()),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn template_error_message(e: &PromptdError) -> String {
    match e {
        PromptdError::TemplateSyntax { source, .. } => {
            format!("invalid template syntax: {source}")
        }
        other => other.to_string(),
    }
}

/// Human-readable summary for `promptd validate` on a valid file.
#[must_use]
pub fn format_validation_report(path: &str, file: &PromptsFile) -> String {
    let mut lines = vec![format!("  {} prompts", file.count())];
    if let Some(prompts) = file.prompts.as_ref() {
        for (name, source) in prompts {
            lines.push(format!(
                "  {}  ({} lines, {} chars)",
                name,
                source.lines().count().max(1),
                source.chars().count()
            ));
        }
    }
    format!("{} is valid\n{}", path, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::loader::parse_prompts_str;

    fn parsed(content: &str) -> PromptsFile {
        parse_prompts_str(content, "test.yaml").unwrap()
    }

    #[test]
    fn valid_file_passes() {
        let file = parsed("prompts:\n  greeting: \"Hello, {{ name }}!\"\n  bye: \"Bye.\"\n");
        assert!(validate(&file).is_ok());
    }

    #[test]
    fn missing_prompts_mapping_is_flagged() {
        let file = parsed("defaults:\n  timeout: 5\n");
        let errors = validate(&file).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("missing top-level 'prompts'"));
    }

    #[test]
    fn empty_mapping_is_flagged() {
        let file = parsed("prompts: {}\n");
        let errors = validate(&file).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("at least one prompt"));
    }

    #[test]
    fn blank_template_is_flagged() {
        let file = parsed("prompts:\n  blank: \"   \"\n");
        let errors = validate(&file).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].prompt, "blank");
        assert!(errors[0].message.contains("empty"));
    }

    #[test]
    fn broken_syntax_is_flagged_with_suggestion() {
        let file = parsed("prompts:\n  broken: \"{{#if x}}no close\"\n");
        let errors = validate(&file).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].prompt, "broken");
        assert!(errors[0].suggestion.is_some());
    }

    #[test]
    fn findings_are_collected_across_prompts() {
        let file = parsed(
            "prompts:\n  a: \"{{ ok }}\"\n  b: \"\"\n  c: \"Hello {{ name\"\n",
        );
        let errors = validate(&file).unwrap_err();
        assert_eq!(errors.len(), 2);
        let names: Vec<&str> = errors.iter().map(|e| e.prompt.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn report_lists_each_prompt() {
        let file = parsed("prompts:\n  greeting: \"Hello, {{ name }}!\"\n");
        let report = format_validation_report("prompts.yaml", &file);
        assert!(report.contains("prompts.yaml is valid"));
        assert!(report.contains("1 prompts"));
        assert!(report.contains("greeting"));
    }
}
