use newsdesk_core::{ConfigError, NewsdeskConfig};

/// Typed view over the keys the server reads at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub addr: String,
    pub database_url: String,
    pub max_connections: u32,
    pub log_filter: String,
}

impl AppSettings {
    pub fn from_config(config: &NewsdeskConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            addr: config.get_or("server.addr", "0.0.0.0:9090".to_string())?,
            database_url: config.get_or("database.url", "sqlite::memory:".to_string())?,
            max_connections: config.get_or("database.max_connections", 5u32)?,
            log_filter: config.get_or("log.filter", "info".to_string())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_keys_are_absent() {
        let settings = AppSettings::from_config(&NewsdeskConfig::empty()).unwrap();
        assert_eq!(settings.addr, "0.0.0.0:9090");
        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn yaml_values_override_defaults() {
        let config = NewsdeskConfig::from_yaml_str(
            "server:\n  addr: \"127.0.0.1:8080\"\ndatabase:\n  url: \"sqlite://news.db\"\n  max_connections: 12\n",
            "test",
        )
        .unwrap();
        let settings = AppSettings::from_config(&config).unwrap();
        assert_eq!(settings.addr, "127.0.0.1:8080");
        assert_eq!(settings.database_url, "sqlite://news.db");
        assert_eq!(settings.max_connections, 12);
    }

    #[test]
    fn wrong_type_is_an_error() {
        let config =
            NewsdeskConfig::from_yaml_str("database:\n  max_connections: lots\n", "test").unwrap();
        assert!(matches!(
            AppSettings::from_config(&config),
            Err(ConfigError::TypeMismatch { .. })
        ));
    }
}
