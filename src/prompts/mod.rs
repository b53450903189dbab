//! Prompt catalog: typed YAML model, loading, compilation, validation.
//!
//! The on-disk document is a YAML mapping with a top-level `prompts`
//! entry mapping prompt names to template-source strings
//! ([`model::PromptsFile`]). [`loader`] turns a path and a name into a
//! compiled [`template::PromptTemplate`], re-reading the file on every
//! call. [`validation`] checks whole files and runs at server startup
//! and in `promptd validate`.

pub mod loader;
pub mod model;
pub mod template;
pub mod validation;
