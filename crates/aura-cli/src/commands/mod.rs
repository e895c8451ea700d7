//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod serve;

/// Aura - placeholder sentiment and keyword analysis
#[derive(Parser)]
#[command(name = "aura")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Analyze text from an argument or stdin
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["aura", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        let config = args.web_config();
        assert_eq!(config.port, aura_web::config::DEFAULT_PORT);
        assert_eq!(config.allowed_origin, aura_web::config::DEFAULT_ALLOWED_ORIGIN);
        assert!(!args.log);
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "aura",
            "serve",
            "--port",
            "9000",
            "--host",
            "0.0.0.0",
            "--cors-origin",
            "https://aura.example",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        let config = args.web_config();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.allowed_origin, "https://aura.example");
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from(["aura", "analyze", "--json", "so good"]).unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze command");
        };
        assert!(args.json);
        assert_eq!(args.text.as_deref(), Some("so good"));
    }
}
