//! Relay server command.

use console::style;

use site_relay::config::RelayConfig;
use site_relay::server::FUNCTION_PATH;

const DEFAULT_PORT: u16 = 8888;

/// Start the relay server.
pub async fn cmd_serve(config: RelayConfig, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    println!(
        "{} Starting contact relay at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Form endpoints: /contact, {}", FUNCTION_PATH);
    println!("  Press Ctrl+C to stop");

    site_relay::server::serve(config, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8888" -> 127.0.0.1:8888
/// - Just a host: "0.0.0.0", "localhost" or "::1" -> HOST:8888
/// - Host and port: "0.0.0.0:8888" or "[::1]:8888"
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    let bind = bind.trim();
    if bind.is_empty() {
        anyhow::bail!("Bind address is empty");
    }

    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Bracketed IPv6, optionally followed by a port
    if let Some(rest) = bind.strip_prefix('[') {
        let Some((host, tail)) = rest.split_once(']') else {
            anyhow::bail!("Unclosed '[' in bind address: {}", bind);
        };
        let port = match tail.strip_prefix(':') {
            Some(port_str) => port_str
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("Invalid port in bind address: {}", bind))?,
            None if tail.is_empty() => DEFAULT_PORT,
            None => anyhow::bail!("Unexpected text after ']' in bind address: {}", bind),
        };
        return Ok((host.to_string(), port));
    }

    // More than one colon without brackets is a bare IPv6 address
    if bind.matches(':').count() > 1 {
        return Ok((bind.to_string(), DEFAULT_PORT));
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        let port = port_str
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("Invalid port in bind address: {}", bind))?;
        return Ok((host.to_string(), port));
    }

    Ok((bind.to_string(), DEFAULT_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_only() {
        assert_eq!(
            parse_bind_address("9000").unwrap(),
            ("127.0.0.1".to_string(), 9000)
        );
    }

    #[test]
    fn test_host_only() {
        assert_eq!(
            parse_bind_address("0.0.0.0").unwrap(),
            ("0.0.0.0".to_string(), 8888)
        );
    }

    #[test]
    fn test_host_and_port() {
        assert_eq!(
            parse_bind_address("0.0.0.0:3000").unwrap(),
            ("0.0.0.0".to_string(), 3000)
        );
    }

    #[test]
    fn test_hostname_kept_for_resolution() {
        assert_eq!(
            parse_bind_address("localhost:8888").unwrap(),
            ("localhost".to_string(), 8888)
        );
        assert_eq!(
            parse_bind_address("localhost").unwrap(),
            ("localhost".to_string(), 8888)
        );
    }

    #[test]
    fn test_bare_ipv6() {
        assert_eq!(parse_bind_address("::1").unwrap(), ("::1".to_string(), 8888));
        assert_eq!(parse_bind_address("::").unwrap(), ("::".to_string(), 8888));
    }

    #[test]
    fn test_bracketed_ipv6() {
        assert_eq!(
            parse_bind_address("[::1]:9000").unwrap(),
            ("::1".to_string(), 9000)
        );
        assert_eq!(parse_bind_address("[::1]").unwrap(), ("::1".to_string(), 8888));
        assert!(parse_bind_address("[::1").is_err());
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(parse_bind_address("localhost:http").is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(parse_bind_address("  ").is_err());
    }
}
