use ferrous_visits_domain::{CliOverrides, Config, ConfigError};
use std::net::SocketAddr;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.web_port, 3000);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.database.path, "./database/visitor.db");
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.database.busy_timeout_secs, 30);
    assert!(config.access.fail_open_on_error);
    assert!(config.access.trust_private_networks);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [server]
        web_port = 8088

        [access]
        fail_open_on_error = false
        "#,
    )
    .unwrap();

    assert_eq!(config.server.web_port, 8088);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert!(!config.access.fail_open_on_error);
    assert!(config.access.trust_private_networks);
    assert_eq!(config.database.url(), "sqlite:./database/visitor.db");
}

#[test]
fn test_config_invalid_toml_is_parse_error() {
    let err = Config::from_toml("[server\nweb_port = ").unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_win() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        web_port: Some(9000),
        bind_address: Some("127.0.0.1".to_string()),
        database_path: Some("/tmp/visits.db".to_string()),
        log_level: Some("debug".to_string()),
    });

    assert_eq!(config.server.web_port, 9000);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.database.path, "/tmp/visits.db");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = Config::default();
    config.server.web_port = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.database.path = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.server.bind_address = "localhost:3000".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_socket_addr_accepts_ipv4_and_ipv6() {
    let mut config = Config::default();
    assert_eq!(
        config.server.socket_addr().unwrap(),
        "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
    );

    config.server.bind_address = "::".to_string();
    config.server.web_port = 8080;
    let addr = config.server.socket_addr().unwrap();
    assert!(addr.is_ipv6());
    assert_eq!(addr, "[::]:8080".parse::<SocketAddr>().unwrap());
    assert!(config.validate().is_ok());
}
