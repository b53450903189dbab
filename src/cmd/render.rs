//! `promptd render` — render a prompt to stdout.
//!
//! One-shot equivalent of the HTTP render surface: loads the named
//! template fresh from the prompts file, fills in `--var KEY=VALUE`
//! bindings, and prints the result. Raw text by default, `--json` for
//! a structured envelope.

use std::collections::HashMap;

use crate::cli::RenderArgs;
use crate::error::PromptdError;
use crate::prompts::loader;

pub fn execute(args: &RenderArgs) -> Result<(), PromptdError> {
    let vars = parse_vars(&args.vars)?;

    let template = loader::load_template(&args.prompts, &args.name)?;
    let rendered = template.render(&vars)?;

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "name": args.name,
                "rendered": rendered,
            })
        );
    } else {
        println!("{rendered}");
    }

    Ok(())
}

fn parse_vars(pairs: &[String]) -> Result<HashMap<String, String>, PromptdError> {
    let mut vars = HashMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(PromptdError::InvalidVariable(pair.clone()));
        };
        if key.is_empty() {
            return Err(PromptdError::InvalidVariable(pair.clone()));
        }
        vars.insert(key.to_string(), value.to_string());
    }
    Ok(vars)
}
