//! CLI parser and command dispatch.

mod check_config;
mod serve;

use clap::{Parser, Subcommand};

use site_relay::config::RelayConfig;

#[derive(Parser)]
#[command(name = "site-relay")]
#[command(about = "Contact-form relay for a personal static website")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the contact relay over HTTP
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:8888)
        #[arg(default_value = "127.0.0.1:8888", env = "SITE_RELAY_BIND")]
        bind: String,
    },

    /// Show the relay configuration picked up from the environment
    CheckConfig,
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing::debug!("Verbose logging enabled");
    }
    let config = RelayConfig::from_env();

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(config, &bind).await,
        Commands::CheckConfig => check_config::cmd_check_config(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["site-relay", "check-config", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::CheckConfig));

        let cli = Cli::try_parse_from(["site-relay", "serve", "0.0.0.0:9000"]).unwrap();
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Serve { ref bind } if bind == "0.0.0.0:9000"));
    }
}
