use std::env;
use std::fs;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct WebServerConfig {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct OpenWeatherConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

#[derive(Deserialize)]
pub struct Config {
    pub web_server: WebServerConfig,
    pub open_weather: OpenWeatherConfig,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_forecast_days() -> u8 {
    5
}

/// Loads the configuration from a toml file.
/// The path to the file is taken from the first command line argument,
/// falling back to weatherproxy.toml in the working directory.
///
pub fn config() -> Result<Config, ConfigError> {
    let path = env::args().nth(1).unwrap_or_else(|| "weatherproxy.toml".to_string());
    let toml_str = fs::read_to_string(path)?;

    parse_config(&toml_str)
}

fn parse_config(toml_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml_str)?;

    if config.open_weather.api_key.is_empty() {
        return Err(ConfigError::from("api_key is missing in the open_weather section"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let config = parse_config(
            r#"
            [web_server]
            bind_address = "0.0.0.0"
            bind_port = 8080

            [open_weather]
            api_key = "secret"
            base_url = "http://localhost:9000"
            forecast_days = 3
            "#,
        ).unwrap();

        assert_eq!(config.web_server.bind_address, "0.0.0.0");
        assert_eq!(config.web_server.bind_port, 8080);
        assert_eq!(config.open_weather.api_key, "secret");
        assert_eq!(config.open_weather.base_url, "http://localhost:9000");
        assert_eq!(config.open_weather.forecast_days, 3);
    }

    #[test]
    fn optional_keys_get_defaults() {
        let config = parse_config(
            r#"
            [web_server]
            bind_address = "127.0.0.1"
            bind_port = 8080

            [open_weather]
            api_key = "secret"
            "#,
        ).unwrap();

        assert_eq!(config.open_weather.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.open_weather.forecast_days, 5);
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = parse_config(
            r#"
            [web_server]
            bind_address = "127.0.0.1"
            bind_port = 8080

            [open_weather]
            api_key = ""
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(parse_config("not a config").is_err());
    }
}
