use rift_dns_domain::config::{CliOverrides, Config};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.upstream.doh_url, "https://dns.google/resolve");
    assert_eq!(config.upstream.query_timeout, 30);
    assert_eq!(config.cache.ttl_secs, 600);
    assert_eq!(config.logging.level, "info");
    assert!(config.rules.is_empty());
}

#[test]
fn test_config_parses_rules_table() {
    let toml_str = r#"
        [server]
        dns_port = 5353
        bind_address = "127.0.0.1"

        [upstream]
        doh_url = "https://cloudflare-dns.com/dns-query"

        [rules]
        "ads.example.com" = "0.0.0.0"
        "*.tracker.net" = "0.0.0.0"
        "nas.lan" = "192.168.1.20"
    "#;

    let config: Config = toml::from_str(toml_str).expect("config should parse");

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.upstream.doh_url, "https://cloudflare-dns.com/dns-query");
    assert_eq!(config.rules.len(), 3);
    assert_eq!(config.rules["*.tracker.net"], "0.0.0.0");
    assert_eq!(config.rules["nas.lan"], "192.168.1.20");
}

#[test]
fn test_config_partial_file_uses_defaults() {
    let toml_str = r#"
        [rules]
        "nas.lan" = "192.168.1.20"
    "#;

    let config: Config = toml::from_str(toml_str).expect("partial config should parse");

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.cache.ttl_secs, 600);
    assert_eq!(config.rules.len(), 1);
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_doh_url() {
    let mut config = Config::default();
    config.upstream.doh_url = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.upstream.query_timeout = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_does_not_reject_bad_rule_ip() {
    // Rule IP syntax is operator responsibility; a bad value only fails to
    // encode into an answer record later.
    let mut config = Config::default();
    config
        .rules
        .insert("broken.lan".to_string(), "not-an-ip".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_overrides_applied() {
    let overrides = CliOverrides {
        dns_port: Some(1053),
        bind_address: Some("127.0.0.1".to_string()),
        doh_url: Some("https://dns.quad9.net/dns-query".to_string()),
        log_level: Some("debug".to_string()),
    };

    let config = Config::load(None, overrides).expect("load with defaults");

    assert_eq!(config.server.dns_port, 1053);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.upstream.doh_url, "https://dns.quad9.net/dns-query");
    assert_eq!(config.logging.level, "debug");
}
