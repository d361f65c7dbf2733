use crate::server::error::config::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("IRCONNECT_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("IRCONNECT_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|err| ConfigError::InvalidEnvValue {
                    var: "IRCONNECT_PORT".to_string(),
                    reason: err.to_string(),
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}
