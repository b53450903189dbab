//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`], [`init`], [`validate`], [`render`], or
//! [`health`]. Each handler lives in its own submodule.

pub mod health;
pub mod init;
pub mod render;
pub mod run;
pub mod validate;

use crate::cli::{Cli, Commands};
use crate::error::PromptdError;

pub async fn dispatch(cli: Cli) -> Result<(), PromptdError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(args).await,
        Some(Commands::Init(ref args)) => init::execute(args),
        Some(Commands::Validate(ref args)) => validate::execute(args),
        Some(Commands::Render(ref args)) => render::execute(args),
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  promptd v{version} \u{2014} HTTP prompt template service\n\n  \
         No command provided. To get started:\n\n    \
         promptd init                     Generate a starter prompts file\n    \
         promptd run                      Start the server (auto-detects ./prompts.yaml)\n    \
         promptd run --prompts rag.yaml   Start with a specific prompts file\n    \
         promptd --help                   See all commands and options\n"
    );
}
