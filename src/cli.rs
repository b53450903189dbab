//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, init, validate, render, health), and their
//! associated argument structs. Flags that matter for deployments
//! have environment variable equivalents.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "promptd",
    version,
    about = "HTTP prompt template service",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        promptd init                              Create a starter prompts file\n  \
        promptd run                               Start with ./prompts.yaml\n  \
        promptd run --prompts rag.yaml            Start with a specific file\n  \
        promptd render greeting --var name=World  One-shot render to stdout"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the prompt server
    Run(RunArgs),

    /// Generate a starter prompts file
    Init(InitArgs),

    /// Validate a prompts file without starting
    Validate(ValidateArgs),

    /// Render a prompt to stdout
    Render(RenderArgs),

    /// Check health of a running instance
    Health(HealthArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        promptd run                                  Auto-detect ./prompts.yaml\n  \
        promptd run --prompts rag.yaml               Specific prompts file\n  \
        promptd run --prompts rag.yaml -p 8080 --pretty    Local dev mode")]
pub struct RunArgs {
    /// Prompts file path (.yaml)
    #[arg(long, env = "PROMPTS_FILE")]
    pub prompts: Option<PathBuf>,

    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    // -- Tuning --
    /// Max request body size in bytes
    #[arg(
        long,
        env = "MAX_BODY_SIZE",
        default_value_t = 1_048_576,
        help_heading = "Tuning"
    )]
    pub max_body: usize,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        promptd init                  Minimal starter file\n  \
        promptd init --full           Documented starter file\n  \
        promptd init -o rag.yaml      Custom output path")]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include full documentation as comments
    #[arg(long)]
    pub full: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Prompts file to validate
    #[arg(default_value = "prompts.yaml")]
    pub prompts: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: ValidateFormat,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        promptd render greeting --var name=World\n  \
        promptd render rag_answer --prompts rag.yaml --var question=\"What is Rust?\"")]
pub struct RenderArgs {
    /// Prompt name to render
    pub name: String,

    /// Prompts file path
    #[arg(long, env = "PROMPTS_FILE", default_value = "prompts.yaml")]
    pub prompts: PathBuf,

    /// Variable binding (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Output a JSON envelope instead of raw text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:3000")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ValidateFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_accepts_repeated_vars() {
        let cli = Cli::try_parse_from([
            "promptd",
            "render",
            "greeting",
            "--var",
            "name=World",
            "--var",
            "tone=formal",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render(args)) => {
                assert_eq!(args.name, "greeting");
                assert_eq!(args.vars, vec!["name=World", "tone=formal"]);
            }
            _ => panic!("expected render subcommand"),
        }
    }

    #[test]
    fn run_rejects_pretty_with_json() {
        let result = Cli::try_parse_from(["promptd", "run", "--pretty", "--json"]);
        assert!(result.is_err());
    }
}
