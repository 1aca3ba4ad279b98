use std::io::Write;
use stubzone_domain::{CliOverrides, Config, ConfigError, LogFormat};
use tempfile::NamedTempFile;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.port, 53);
    assert_eq!(config.server.port_fallback, 0);
    assert_eq!(config.storage.path, "dns.json");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_file_fills_defaults() {
    let toml_str = r#"
        [server]
        port = 5353

        [logging]
        format = "json"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.port, 5353);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.storage.path, "dns.json");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_config_load_from_explicit_path_with_overrides() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nbind_address = \"127.0.0.1\"\nport = 1053\n\n[storage]\npath = \"records.json\""
    )
    .unwrap();
    file.flush().unwrap();

    let overrides = CliOverrides {
        port: Some(2053),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    let config = Config::load(file.path().to_str(), overrides).unwrap();
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.port, 2053);
    assert_eq!(config.storage.path, "records.json");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_load_missing_file_fails() {
    let result = Config::load(Some("/nonexistent/stubzone.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_config_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[server\nport = ").unwrap();
    file.flush().unwrap();

    let result = Config::from_file(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_validation_rejects_zero_port() {
    let mut config = Config::default();
    config.server.port = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_config_validation_rejects_empty_storage_path() {
    let mut config = Config::default();
    config.storage.path = " ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_save_round_trip() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();

    let mut config = Config::default();
    config.server.port = 5353;
    config.storage.path = "/var/lib/stubzone/dns.json".to_string();
    config.save(path).unwrap();

    let loaded = Config::from_file(path).unwrap();
    assert_eq!(loaded.server.port, 5353);
    assert_eq!(loaded.storage.path, "/var/lib/stubzone/dns.json");
}
