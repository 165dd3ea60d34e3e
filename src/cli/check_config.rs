//! Configuration check command.

use console::style;

use site_relay::config::RelayConfig;

/// Print the effective relay configuration. Fails when the API key is missing.
pub fn cmd_check_config(config: &RelayConfig) -> anyhow::Result<()> {
    let key = match config.api_key.as_deref() {
        Some(key) => mask_key(key),
        None => style("(not set)").red().to_string(),
    };
    let from = config
        .from_email
        .clone()
        .unwrap_or_else(|| "(submitter's address)".to_string());

    eprintln!("  {} SENDGRID_API_KEY: {}", style("→").dim(), key);
    eprintln!("  {} TO_EMAIL: {}", style("→").dim(), config.to_email);
    eprintln!("  {} FROM_EMAIL: {}", style("→").dim(), from);
    eprintln!("  {} Endpoint: {}", style("→").dim(), config.endpoint);

    config.api_key()?;
    eprintln!("{} Relay configuration looks usable", style("✓").green());
    Ok(())
}

/// Show only the first few characters of a secret.
fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{}…", visible)
}
