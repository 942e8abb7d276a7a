pub mod app_state;
pub mod errors;
pub mod startup;

pub mod config {
    pub use kaizen_config::{
        Config, ConfigLoad, ConfigLoadError, ConfigLoader, ConfigMetadata,
        ConfigWarnings, CorsConfig, DatabaseConfig, ServerConfig,
    };
}
