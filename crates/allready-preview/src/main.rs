//! allready-preview: print the captions the form would generate.
//!
//! Drives the same workflow state machine as the web app, without a
//! browser and without the simulated service delays: the product name
//! and price go in, the Generate effect is answered by the caption
//! templates, and the resulting French and English captions are printed.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin allready-preview -- --name "Red Shoes" --price 15000
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use allready_core::{
    Action, CaptionPair, Effect, Language, Stage, TemplateCaptions, Workflow, WorkflowConfig,
};
use clap::Parser;

/// Preview the bilingual marketing captions for a product.
#[derive(Parser)]
#[command(name = "allready-preview", version)]
struct Cli {
    /// Product name.
    #[arg(long)]
    name: String,

    /// Product price. Anything other than digits and `.` is dropped.
    #[arg(long)]
    price: String,

    /// Currency printed after the price.
    #[arg(long)]
    currency: Option<String>,

    /// Print the captions as a JSON object instead of plain text.
    #[arg(long)]
    json: bool,

    /// Workflow configuration as JSON (missing fields take defaults).
    #[arg(long)]
    config_json: Option<String>,
}

/// Build a [`WorkflowConfig`] from CLI arguments.
fn config_from_cli(cli: &Cli) -> Result<WorkflowConfig, String> {
    let mut config = match &cli.config_json {
        Some(json) => serde_json::from_str::<WorkflowConfig>(json)
            .map_err(|e| format!("Invalid --config-json: {e}"))?,
        None => WorkflowConfig::default(),
    };
    if let Some(currency) = &cli.currency {
        currency.clone_into(&mut config.currency);
    }
    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {e}"))?;
    Ok(config)
}

/// Run the workflow from an empty form through caption generation.
///
/// Returns the notice message when the workflow refuses to generate.
fn generate(config: WorkflowConfig, name: &str, price: &str) -> Result<CaptionPair, String> {
    let mut workflow = Workflow::new(config);
    workflow.apply(Action::EditName(name.to_owned()));
    workflow.apply(Action::EditPrice(price.to_owned()));

    let Some(Effect::Generate { session, request }) = workflow.apply(Action::Generate) else {
        return Err(workflow
            .notice()
            .map_or_else(|| "Caption generation did not start".to_owned(), |n| n.message.clone()));
    };

    let captions = TemplateCaptions::render(&request);
    workflow.apply(Action::GenerationFinished {
        session,
        result: Ok(captions),
    });

    if workflow.stage() != Stage::Captions {
        return Err("Caption generation did not complete".to_owned());
    }
    Ok(workflow.captions().clone())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let captions = match generate(config, &cli.name, &cli.price) {
        Ok(captions) => captions,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&captions) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing captions: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for (i, language) in Language::ALL.into_iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("=== {} ===", language.label());
            println!("{}", captions.get(language));
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["allready-preview"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn currency_flag_overrides_config_json() {
        let cli = cli(&[
            "--name",
            "Lamp",
            "--price",
            "10",
            "--currency",
            "EUR",
            "--config-json",
            r#"{"currency": "USD"}"#,
        ]);
        assert_eq!(config_from_cli(&cli).unwrap().currency, "EUR");
    }

    #[test]
    fn malformed_config_json_is_reported() {
        let cli = cli(&["--name", "Lamp", "--price", "10", "--config-json", "{"]);
        let err = config_from_cli(&cli).unwrap_err();
        assert!(err.starts_with("Invalid --config-json"), "{err}");
    }

    #[test]
    fn blank_currency_fails_validation() {
        let cli = cli(&["--name", "Lamp", "--price", "10", "--currency", " "]);
        assert!(config_from_cli(&cli).is_err());
    }

    #[test]
    fn generates_both_captions() {
        let captions = generate(WorkflowConfig::default(), "Red Shoes", "15000").unwrap();
        for language in Language::ALL {
            let text = captions.get(language);
            assert!(text.contains("Red Shoes"));
            assert!(text.contains("15000 FCFA"));
            assert!(text.contains("#RedShoes"));
        }
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = generate(WorkflowConfig::default(), "Lamp", "free").unwrap_err();
        assert!(!err.is_empty());
    }
}
