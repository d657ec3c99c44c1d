use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub index_html: String,
    pub extraction_endpoint: String,
    pub search_url: String,
    pub result_offset: u32,
    pub result_limit: u32,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            index_html: "index.html".into(),
            extraction_endpoint: "https://query.yahooapis.com/v1/public/yql".into(),
            search_url: "http://www.amazon.com/s?url=search-alias%3Daps&field-keywords=".into(),
            result_offset: 0,
            result_limit: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AmazonScout/0.1".into(),
        }
    }
}

/// Reads `path`, falling back to defaults when the file does not exist,
/// then applies the `PORT` override.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let mut config = match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?,
        Err(e) if e.kind() == ErrorKind::NotFound => AppConfig::default(),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_string(),
                source,
            });
        }
    };
    apply_port_override(&mut config, std::env::var("PORT").ok())?;
    Ok(config)
}

fn apply_port_override(config: &mut AppConfig, port: Option<String>) -> Result<(), ConfigError> {
    if let Some(raw) = port {
        config.port = raw.trim().parse().map_err(|_| ConfigError::Port(raw))?;
    }
    Ok(())
}
