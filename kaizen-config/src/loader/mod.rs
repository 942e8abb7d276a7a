pub mod error;

use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

use crate::{
    models::{
        Config, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig,
        sources::{EnvConfig, FileConfig, FileDatabaseConfig},
    },
    validation::ConfigWarnings,
};
use error::ConfigLoadError;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("kaizen.toml"),
        PathBuf::from("config/kaizen.toml"),
    ]
});

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Use these values instead of reading `.env` and the process
    /// environment.
    pub env: Option<EnvConfig>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (env_config, env_file_loaded) = match &self.options.env {
            Some(env) => (env.clone(), false),
            None => {
                let loaded = self.load_env_file()?;
                (EnvConfig::gather(), loaded)
            }
        };

        let (file_config, config_path) = self.load_file_config(&env_config)?;

        let (config, warnings) = self.compose_config(
            file_config,
            env_config,
            config_path,
            env_file_loaded,
        )?;

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let result = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };
        match result {
            Ok(()) => Ok(true),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let mut source = ConfigPathSource::default();

        if let Some(explicit) = &self.options.config_path {
            source.explicit = Some(explicit.clone());
        } else if let Some(from_env) = &env_config.config_path {
            source.env = Some(from_env.clone());
        } else {
            source.default = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .cloned();
        }

        let Some((path, provenance)) = source.resolved_path() else {
            return Ok((None, None));
        };

        if !path.exists() {
            if provenance.is_explicit() {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents = fs::read_to_string(&path).map_err(|err| {
            ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            }
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
        env_file_loaded: bool,
    ) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No kaizen.toml detected; using environment variables only",
                "Set KAIZEN_CONFIG or pass --config to load a file",
            );
        }

        let FileConfig {
            server: file_server,
            database: file_database,
            cors: file_cors,
        } = file_config.unwrap_or_default();

        let server = ServerConfig {
            host: env
                .server_host
                .clone()
                .filter(|host| !host.trim().is_empty())
                .or(file_server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
        };

        let max_connections = env
            .db_max_connections
            .or(file_database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
            .max(1);
        let mut min_connections = env
            .db_min_connections
            .or(file_database.min_connections)
            .unwrap_or(DEFAULT_MIN_CONNECTIONS);
        if min_connections > max_connections {
            warnings.push_with_hint(
                format!(
                    "DB_MIN_CONNECTIONS ({min_connections}) exceeds \
                     DB_MAX_CONNECTIONS ({max_connections})"
                ),
                "The minimum was lowered to the maximum",
            );
            min_connections = max_connections;
        }

        let database = DatabaseConfig {
            url: Self::resolve_database_url(&env, &file_database)?,
            max_connections,
            min_connections,
        };

        let cors = CorsConfig {
            allowed_origins: env
                .cors_allowed_origins
                .clone()
                .or(file_cors.allowed_origins)
                .unwrap_or_else(|| vec!["*".to_string()]),
        };

        let metadata = ConfigMetadata {
            config_path,
            env_file_loaded,
        };

        Ok((
            Config {
                server,
                database,
                cors,
                metadata,
            },
            warnings,
        ))
    }

    fn resolve_database_url(
        env: &EnvConfig,
        file_database: &FileDatabaseConfig,
    ) -> Result<String, ConfigLoadError> {
        let mut candidate = env
            .database_url
            .clone()
            .filter(|value| !value.trim().is_empty());

        if candidate.is_none()
            && let Some(path) = env.database_url_file.as_ref()
        {
            candidate = Self::read_secret_file(path)?;
        }

        if candidate.is_none() {
            candidate = file_database
                .url
                .clone()
                .filter(|value| !value.trim().is_empty());
        }

        let raw = candidate.ok_or(ConfigLoadError::MissingDatabaseUrl)?;
        let raw = raw.trim();
        let parsed = Url::parse(raw)
            .map_err(|source| ConfigLoadError::InvalidDatabaseUrl { source })?;
        match parsed.scheme() {
            "postgres" | "postgresql" => Ok(raw.to_string()),
            other => Err(ConfigLoadError::UnsupportedDatabaseScheme {
                scheme: other.to_string(),
            }),
        }
    }

    fn read_secret_file(
        path: &Path,
    ) -> Result<Option<String>, ConfigLoadError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            ConfigLoadError::SecretFileIo {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }
}

#[derive(Debug, Default)]
struct ConfigPathSource {
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    default: Option<PathBuf>,
}

impl ConfigPathSource {
    fn resolved_path(&self) -> Option<(PathBuf, ConfigPathProvenance)> {
        if let Some(path) = &self.explicit {
            return Some((path.clone(), ConfigPathProvenance::Explicit));
        }
        if let Some(path) = &self.env {
            return Some((path.clone(), ConfigPathProvenance::Env));
        }
        if let Some(path) = &self.default {
            return Some((path.clone(), ConfigPathProvenance::Default));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigPathProvenance {
    Explicit,
    Env,
    Default,
}

impl ConfigPathProvenance {
    fn is_explicit(self) -> bool {
        matches!(
            self,
            ConfigPathProvenance::Explicit | ConfigPathProvenance::Env
        )
    }
}
