//! Promptd is an HTTP prompt template service.
//!
//! It serves prompt templates out of a YAML file. Every request is
//! tagged with a fresh correlation id by the request-id middleware,
//! and the render surface loads templates from disk on each call,
//! compiles them with Handlebars, and fills in caller-supplied
//! variables. Nothing is cached, so prompt edits take effect on the
//! next request.
//!
//! # Architecture
//!
//! - [`api`] -- Prompt listing and rendering handlers.
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, init, validate,
//!   render, health).
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`health`] -- `GET /health` endpoint handler returning runtime diagnostics.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`middleware`] -- Request correlation middleware (`X-Request-ID`).
//! - [`prompts`] -- Typed prompts-file model, loading, template
//!   compilation, and validation.
//! - [`server`] -- Axum server setup, shared application state, and
//!   graceful shutdown.

// Binary crate - public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod cli;
pub mod cmd;
pub mod error;
pub mod health;
pub mod logging;
pub mod middleware;
pub mod prompts;
pub mod server;
