use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TelemetryConfig {
    /// Fixed seed for deterministic snapshots. Unset means fresh randomness.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Defaults, then an optional `telemetry.*` file, then `TELEMETRY_*` env vars
    /// (`TELEMETRY_SERVER__PORT=9000`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let _ = dotenvy::dotenv();

        let settings = Self::defaults()?
            .add_source(config::File::with_name("telemetry").required(false))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("TELEMETRY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use config::{File, FileFormat};

    fn from_toml(raw: &str) -> Config {
        Config::defaults()
            .unwrap()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_need_no_file() {
        let config = from_toml("");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.workers, None);
        assert_eq!(config.telemetry.seed, None);
        assert_eq!(config.server_address(), "0.0.0.0:8000");
    }

    #[test]
    fn file_values_override_defaults() {
        let config = from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9100
            workers = 2

            [telemetry]
            seed = 42
            "#,
        );

        assert_eq!(config.server_address(), "127.0.0.1:9100");
        assert_eq!(config.server.workers, Some(2));
        assert_eq!(config.telemetry.seed, Some(42));
    }

    #[test]
    fn environment_overrides_and_parses_numbers() {
        let mut vars = config::Map::new();
        vars.insert("TELEMETRY_SERVER__PORT".to_string(), "9123".to_string());
        vars.insert("TELEMETRY_SERVER__HOST".to_string(), "127.0.0.1".to_string());
        vars.insert("TELEMETRY_TELEMETRY__SEED".to_string(), "42".to_string());
        vars.insert("OTHER_SERVER__PORT".to_string(), "1".to_string());

        let config: Config = Config::defaults()
            .unwrap()
            .add_source(Config::environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9123);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.telemetry.seed, Some(42));
        assert_eq!(config.server.workers, None);
    }

    #[test]
    fn environment_beats_file() {
        let mut vars = config::Map::new();
        vars.insert("TELEMETRY_SERVER__PORT".to_string(), "9200".to_string());

        let config: Config = Config::defaults()
            .unwrap()
            .add_source(File::from_str("[server]\nport = 9100", FileFormat::Toml))
            .add_source(Config::environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let result = Config::defaults()
            .unwrap()
            .add_source(File::from_str("[server]\nport = \"eighty\"", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize::<Config>();

        assert!(result.is_err());
    }
}
