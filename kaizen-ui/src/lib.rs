//! Interaction engine and catalog client for the Kaizen storefront.
//!
//! The [`engine`] module holds the reusable pieces (slide scheduling,
//! pointer regions, drag/wheel scrolling, reveal and parallax observation).
//! [`widgets`] composes them into the storefront's sliders and rails.
//! Nothing reads a clock or touches a platform API directly: inputs arrive
//! as method calls with explicit timestamps, and outputs are typed values
//! for the rendering layer.

pub mod engine;
pub mod infra;
pub mod messages;
pub mod widgets;

pub use infra::{CatalogClient, ClientError, ClientResult};
pub use kaizen_model as model;
