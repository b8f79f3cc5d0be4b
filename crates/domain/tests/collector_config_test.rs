use bindlog_collector_domain::config::root::{ENV_CLIENT_KEY, ENV_COLLECTOR_ID, ENV_HOST};
use bindlog_collector_domain::{CliOverrides, CollectorConfig, Config, ConfigError};
use std::collections::HashMap;
use std::time::Duration;

fn configured() -> Config {
    let mut config = Config::default();
    config.collector.host = "https://api.example.com".to_string();
    config.collector.collector_id = "5ab55d08-ae72-4017-a41c-d9d735360288".to_string();
    config.collector.client_key = "secret".to_string();
    config
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.pipeline.chunk_size, 500);
    assert_eq!(config.collector.timeout_secs, 20);
    assert_eq!(config.collector.timeout(), Duration::from_secs(20));
    assert_eq!(config.logging.level, "info");
    assert!(config.collector.host.is_empty());
}

#[test]
fn test_config_deserialization_fills_missing_sections() {
    let toml_str = r#"
        [collector]
        host = "https://api.example.com"
        collector_id = "abc"
        client_key = "key"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.collector.host, "https://api.example.com");
    assert_eq!(config.collector.timeout_secs, 20);
    assert_eq!(config.pipeline.chunk_size, 500);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_deserialization_full_file() {
    let toml_str = r#"
        [collector]
        host = "https://collector.internal"
        collector_id = "abc"
        client_key = "key"
        timeout_secs = 5

        [pipeline]
        chunk_size = 100

        [logging]
        level = "debug"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.collector.timeout_secs, 5);
    assert_eq!(config.pipeline.chunk_size, 100);
    assert_eq!(config.pipeline.chunk_size().unwrap().get(), 100);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_queries_url_ignores_trailing_slash() {
    let collector = CollectorConfig {
        host: "https://api.example.com/".to_string(),
        collector_id: "abc".to_string(),
        client_key: "key".to_string(),
        timeout_secs: 20,
    };

    assert_eq!(
        collector.queries_url(),
        "https://api.example.com/collectors/abc/dns/queries"
    );
}

#[test]
fn test_validate_rejects_zero_chunk_size() {
    let mut config = configured();
    config.pipeline.chunk_size = 0;

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    assert!(config.pipeline.chunk_size().is_err());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = configured();
    config.collector.timeout_secs = 0;

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_requires_endpoint_settings() {
    let mut config = configured();
    config.collector.client_key = "  ".to_string();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains(ENV_CLIENT_KEY));

    assert!(Config::default().validate().is_err());
}

#[test]
fn test_env_overrides_apply_and_skip_empty_values() {
    let env: HashMap<&str, &str> = HashMap::from([
        (ENV_HOST, "https://from-env.example.com"),
        (ENV_COLLECTOR_ID, ""),
        (ENV_CLIENT_KEY, "env-key"),
    ]);

    let mut config = configured();
    config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.collector.host, "https://from-env.example.com");
    assert_eq!(
        config.collector.collector_id,
        "5ab55d08-ae72-4017-a41c-d9d735360288"
    );
    assert_eq!(config.collector.client_key, "env-key");
}

#[test]
fn test_cli_overrides_win_over_env() {
    let mut config = configured();
    config.apply_env_overrides(|key| (key == ENV_HOST).then(|| "https://env".to_string()));
    config.apply_cli_overrides(CliOverrides {
        host: Some("https://cli".to_string()),
        chunk_size: Some(50),
        timeout_secs: Some(3),
        log_level: Some("warn".to_string()),
        ..Default::default()
    });

    assert_eq!(config.collector.host, "https://cli");
    assert_eq!(config.pipeline.chunk_size, 50);
    assert_eq!(config.collector.timeout_secs, 3);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_load_reports_missing_explicit_file() {
    let result = Config::load(
        Some("/nonexistent/bindlog-collector.toml"),
        CliOverrides::default(),
    );

    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
