//! Backend and weather endpoints. Defaults can be overridden at build time
//! (`BIKESHARE_API_URL`, `BIKESHARE_WEATHER_URL`) and the backend address at runtime
//! from the setup screen.

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("invalid port: {0}")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub weather_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with any URL baked in through the build environment.
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("BIKESHARE_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            weather_url: option_env!("BIKESHARE_WEATHER_URL")
                .unwrap_or(DEFAULT_WEATHER_URL)
                .to_string(),
        }
    }

    /// Same config pointed at `http://{host}:{port}`.
    pub fn with_backend(&self, host: &str, port: &str) -> Result<Self, ConfigError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        Ok(Self {
            api_base_url: format!("http://{}:{}", host, port),
            weather_url: self.weather_url.clone(),
        })
    }

    /// Host and port of the backend, for prefilling the setup form.
    pub fn backend_address(&self) -> (String, String) {
        let rest = self
            .api_base_url
            .split_once("://")
            .map(|(_, r)| r)
            .unwrap_or(&self.api_base_url);
        let rest = rest.trim_end_matches('/');
        match rest.rsplit_once(':') {
            Some((host, port)) => (host.to_string(), port.to_string()),
            None => (rest.to_string(), "80".to_string()),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_backend_builds_http_url() {
        let cfg = ClientConfig::default().with_backend(" 10.0.0.5 ", "9000").unwrap();
        assert_eq!(cfg.api_base_url, "http://10.0.0.5:9000");
        assert_eq!(cfg.weather_url, DEFAULT_WEATHER_URL);
    }

    #[test]
    fn with_backend_rejects_bad_input() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.with_backend("", "8000"), Err(ConfigError::EmptyHost));
        assert_eq!(
            cfg.with_backend("localhost", "eighty"),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
    }

    #[test]
    fn backend_address_round_trips_default() {
        let (host, port) = ClientConfig::default().backend_address();
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, "8000");
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let cfg = ClientConfig {
            api_base_url: "http://api.local/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(cfg.endpoint("/events"), "http://api.local/events");
    }
}
