use super::*;

#[test]
fn parse_defaults_when_unset() {
    let cfg = ServerConfig::parse(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parse_treats_blank_as_unset() {
    let cfg = ServerConfig::parse(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn parse_reads_overrides() {
    let cfg = ServerConfig::parse(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parse_accepts_ipv6() {
    let cfg = ServerConfig::parse(Some("::1"), Some("3001")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3001");
}

#[test]
fn parse_rejects_bad_port() {
    assert_eq!(ServerConfig::parse(None, Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(ServerConfig::parse(None, Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn parse_rejects_bad_bind_addr() {
    assert_eq!(
        ServerConfig::parse(Some("localhost"), None),
        Err(ConfigError::InvalidBindAddr("localhost".into()))
    );
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT \"x\"");
    assert_eq!(ConfigError::InvalidBindAddr("y".into()).to_string(), "invalid BIND_ADDR \"y\"");
}
