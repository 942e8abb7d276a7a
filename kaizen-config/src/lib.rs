//! Configuration loading for the Kaizen storefront.
//!
//! Values are layered from an optional `kaizen.toml`, a `.env` file and the
//! process environment, with the environment taking precedence. The server
//! binary consumes the resulting [`Config`] and prints any
//! [`ConfigWarnings`] at startup.

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    Config, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig,
};
pub use validation::{ConfigWarning, ConfigWarnings};
