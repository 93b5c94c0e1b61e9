use newsdesk_core::config::{ConfigError, ConfigValue, NewsdeskConfig};
use serial_test::serial;

#[test]
fn test_empty_config() {
    let config = NewsdeskConfig::empty();
    assert!(matches!(
        config.get::<String>("nonexistent"),
        Err(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_set_and_get() {
    let mut config = NewsdeskConfig::empty();
    config.set("server.addr", ConfigValue::String("127.0.0.1:9000".into()));
    assert_eq!(config.get::<String>("server.addr").unwrap(), "127.0.0.1:9000");
}

#[test]
fn test_get_or_only_defaults_missing_keys() {
    let mut config = NewsdeskConfig::empty();
    assert_eq!(config.get_or("database.max_connections", 5u32).unwrap(), 5);

    config.set("database.max_connections", ConfigValue::String("many".into()));
    assert!(matches!(
        config.get_or("database.max_connections", 5u32),
        Err(ConfigError::TypeMismatch { .. })
    ));
}

#[test]
fn test_flatten_yaml() {
    let yaml = r#"
server:
  addr: "0.0.0.0:9090"
database:
  url: "sqlite::memory:"
  max_connections: 4
log:
  filter: "newsdesk=debug"
"#;
    let config = NewsdeskConfig::from_yaml_str(yaml, "test").unwrap();

    assert_eq!(config.get::<String>("database.url").unwrap(), "sqlite::memory:");
    assert_eq!(config.get::<u32>("database.max_connections").unwrap(), 4);
    assert_eq!(config.get::<String>("log.filter").unwrap(), "newsdesk=debug");
    assert!(config.contains_key("server.addr"));
}

#[test]
fn test_sequences_are_indexed() {
    let yaml = r#"
cors:
  origins:
    - "http://localhost"
    - "https://news.example"
"#;
    let config = NewsdeskConfig::from_yaml_str(yaml, "test").unwrap();
    assert_eq!(
        config.get::<String>("cors.origins.1").unwrap(),
        "https://news.example"
    );
}

#[test]
fn test_integer_range_is_checked() {
    let mut config = NewsdeskConfig::empty();
    config.set("database.max_connections", ConfigValue::Integer(-1));
    assert!(config.get::<u32>("database.max_connections").is_err());
}

#[test]
fn test_invalid_yaml_is_load_error() {
    let err = NewsdeskConfig::from_yaml_str("server: [unclosed", "test").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
#[serial]
fn test_profile_file_overrides_base_and_env_overrides_both() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("application.yaml"),
        "site:\n  title: \"Newsdesk\"\nserver:\n  addr: \"0.0.0.0:9090\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("application-prod.yaml"),
        "server:\n  addr: \"0.0.0.0:80\"\n",
    )
    .unwrap();

    std::env::set_var("NEWSDESK_TEST_OVERRIDE", "from-env");
    let config = NewsdeskConfig::load_from(dir.path(), "prod").unwrap();
    std::env::remove_var("NEWSDESK_TEST_OVERRIDE");

    assert_eq!(config.profile(), "prod");
    assert_eq!(config.get::<String>("server.addr").unwrap(), "0.0.0.0:80");
    assert_eq!(config.get::<String>("site.title").unwrap(), "Newsdesk");
    assert_eq!(
        config.get::<String>("newsdesk.test.override").unwrap(),
        "from-env"
    );
}
