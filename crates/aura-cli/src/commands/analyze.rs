//! Text analysis command.

use anyhow::{Context, Result};
use clap::Args;
use aura_core::AnalysisResult;
use std::io::Read;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin when omitted)
    pub text: Option<String>,

    /// Print the same JSON the HTTP API returns
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let result = aura_core::analyze(&text);
    tracing::debug!(chars = text.chars().count(), "Analyzed text from CLI");

    if args.json {
        println!("{}", render_json(&result)?);
    } else {
        output::print_analysis(&result);
    }

    Ok(())
}

/// Compact JSON, byte-identical to the `/process_text` response body.
fn render_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_is_compact() {
        let result = aura_core::analyze("goodbye friend");
        assert_eq!(
            render_json(&result).unwrap(),
            r#"{"sentiment":0.8,"keywords":["goodbye","friend"]}"#
        );
    }

    #[test]
    fn test_render_json_empty_input() {
        let result = aura_core::analyze("");
        assert_eq!(render_json(&result).unwrap(), r#"{"sentiment":0.3,"keywords":[]}"#);
    }
}
