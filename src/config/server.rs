use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EnvMode {
    #[default]
    Dev,
    Prod,
}

impl FromStr for EnvMode {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(EnvMode::Dev),
            "prod" | "production" => Ok(EnvMode::Prod),
            other => Err(SiteError::InvalidConfigValueError {
                field: "env".to_string(),
                value: other.to_string(),
                reason: "expected dev or prod".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub env: EnvMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            env: EnvMode::Dev,
        }
    }
}

impl ServerConfig {
    /// 從環境變數讀取 (TERRIGO_HOST, PORT, TERRIGO_ENV)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("TERRIGO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| SiteError::InvalidConfigValueError {
                    field: "PORT".to_string(),
                    value: raw.clone(),
                    reason: "must be a number between 0 and 65535".to_string(),
                })?,
            None => DEFAULT_PORT,
        };
        let env = match lookup("TERRIGO_ENV") {
            Some(raw) => raw.parse()?,
            None => EnvMode::Dev,
        };
        Ok(Self { host, port, env })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| SiteError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: "not a valid IP address".to_string(),
            })
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        self.bind_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_reads_port_and_mode() {
        let config =
            ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("TERRIGO_ENV", "production")]))
                .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.env, EnvMode::Prod);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(ServerConfig::from_lookup(lookup(&[("PORT", "http")])).is_err());
    }

    #[test]
    fn test_rejects_hostname_bind() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
