//! Integration tests for prompt loading and its failure kinds.
//!
//! Each failure stage of the load pipeline (read, parse, lookup,
//! compile) must surface as its own error kind, and nothing may be
//! cached between loads.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use promptd::error::PromptdError;
use promptd::prompts::loader;
use promptd::prompts::validation;
use tempfile::TempDir;

fn write_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("prompts.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn greeting_renders_hello_world() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prompts:\n  greeting: \"Hello, {{ name }}!\"\n");

    let template = loader::load_template(&path, "greeting").unwrap();
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), "World".to_string());
    assert_eq!(template.render(&vars).unwrap(), "Hello, World!");
}

#[test]
fn missing_file_fails_before_parsing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.yaml");

    let err = loader::load_template(&path, "greeting").unwrap_err();
    assert!(matches!(err, PromptdError::PromptsFileNotFound { .. }));
}

#[test]
fn missing_prompts_mapping_is_key_not_found() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "defaults:\n  model: \"gpt\"\n");

    let err = loader::load_template(&path, "greeting").unwrap_err();
    match err {
        PromptdError::KeyNotFound { key, .. } => assert_eq!(key, "prompts"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_entry_is_key_not_found() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prompts:\n  greeting: \"Hello, {{ name }}!\"\n");

    let err = loader::load_template(&path, "farewell").unwrap_err();
    match err {
        PromptdError::KeyNotFound { key, .. } => assert_eq!(key, "prompts.farewell"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prompts: [unclosed\n");

    let err = loader::load_template(&path, "greeting").unwrap_err();
    assert!(matches!(err, PromptdError::PromptsParse { .. }));
}

#[test]
fn wrong_prompts_shape_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prompts:\n  - one\n  - two\n");

    let err = loader::load_template(&path, "greeting").unwrap_err();
    assert!(matches!(err, PromptdError::PromptsParse { .. }));
}

#[test]
fn unbalanced_template_syntax_fails_compilation() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prompts:\n  broken: \"Hello {{ name\"\n");

    let err = loader::load_template(&path, "broken").unwrap_err();
    assert!(matches!(err, PromptdError::TemplateSyntax { .. }));
}

#[test]
fn edits_are_visible_on_the_next_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prompts:\n  greeting: \"Hello, {{ name }}!\"\n");
    let vars = HashMap::from([("name", "World")]);

    let first = loader::load_template(&path, "greeting").unwrap();
    assert_eq!(first.render(&vars).unwrap(), "Hello, World!");

    std::fs::write(&path, "prompts:\n  greeting: \"Goodbye, {{ name }}!\"\n").unwrap();

    let second = loader::load_template(&path, "greeting").unwrap();
    assert_eq!(second.render(&vars).unwrap(), "Goodbye, World!");
}

#[test]
fn validation_collects_findings_across_prompts() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "prompts:\n  ok: \"{{ x }}\"\n  blank: \"\"\n  broken: \"{{#if y}}no close\"\n",
    );

    let file = loader::load_prompts(&path).unwrap();
    let errors = validation::validate(&file).unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn example_prompts_file_loads_and_renders() {
    let path = Path::new("example/prompts.yaml");
    let template = loader::load_template(path, "greeting").unwrap();

    let vars = HashMap::from([("name", "World")]);
    assert_eq!(template.render(&vars).unwrap(), "Hello, World!");
}

#[test]
fn example_full_file_validates() {
    let path = Path::new("example/full.yaml");
    let file = loader::load_prompts(path).unwrap();
    assert!(validation::validate(&file).is_ok());
    assert!(file.count() >= 3);
}
