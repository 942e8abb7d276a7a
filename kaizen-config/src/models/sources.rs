use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{parse_csv_var, parse_num_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub database: FileDatabaseConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_connections: Option<u32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub database_url: Option<String>,
    pub database_url_file: Option<PathBuf>,
    pub db_max_connections: Option<u32>,
    pub db_min_connections: Option<u32>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            server_host: std::env::var("SERVER_HOST").ok(),
            server_port: parse_num_var("SERVER_PORT"),
            database_url: std::env::var("DATABASE_URL").ok(),
            database_url_file: std::env::var("DATABASE_URL_FILE")
                .ok()
                .map(PathBuf::from),
            db_max_connections: parse_num_var("DB_MAX_CONNECTIONS"),
            db_min_connections: parse_num_var("DB_MIN_CONNECTIONS"),
            cors_allowed_origins: parse_csv_var("CORS_ALLOWED_ORIGINS"),
            config_path: std::env::var("KAIZEN_CONFIG").ok().map(PathBuf::from),
        }
    }
}
