//! Web server command.

use anyhow::Result;
use aura_web::config::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_HOST, DEFAULT_PORT};
use aura_web::WebConfig;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "AURA_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "AURA_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Browser origin allowed to call the API
    #[arg(long, env = "AURA_CORS_ORIGIN", default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub cors_origin: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (used with --log)
    #[arg(long, default_value = "aura-serve.log")]
    pub log_file: PathBuf,
}

impl ServeArgs {
    pub fn web_config(&self) -> WebConfig {
        WebConfig {
            host: self.host.clone(),
            port: self.port,
            allowed_origin: self.cors_origin.clone(),
        }
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.web_config();

    println!();
    println!("  {} {}", "Aura".cyan().bold(), "Text Analysis API".bold());
    println!();
    println!("  {}    http://{}:{}/health", "Health".green(), config.host, config.port);
    println!("  {}   http://{}:{}/process_text", "Analyze".green(), config.host, config.port);
    println!("  {}      {}", "CORS".green(), config.allowed_origin);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    aura_web::run_server(config).await
}
