//! # Kaizen Core
//!
//! Catalog persistence for the Kaizen storefront.
//!
//! ## Overview
//!
//! - **Ports**: [`database::ports::products::ProductRepository`] is the only
//!   seam the HTTP layer talks to.
//! - **PostgreSQL**: [`database::PostgresDatabase`] owns the pool and applies
//!   the embedded migrations ([`MIGRATOR`]).
//! - **In-memory**: [`database::InMemoryProductRepository`] implements the
//!   same port for tests and local demos.
//! - **Catalog service**: [`catalog::CatalogService`] turns repository misses
//!   into [`error::CatalogError::NotFound`].
//! - **Seed**: [`seed`] reinserts the fixed demo records by slug.
//!
//! ## Feature Flags
//!
//! - `database` (default): PostgreSQL/SQLx support and the migrator.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Read-side catalog operations
pub mod catalog;

/// Repository ports and adapters
pub mod database;

/// Error types and error handling utilities
pub mod error;

/// Demo catalog seeding
pub mod seed;

#[cfg(feature = "database")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub use kaizen_model as model;
