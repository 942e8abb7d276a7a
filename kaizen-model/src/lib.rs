//! Catalog data model definitions shared across Kaizen crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod error;
pub mod ids;
pub mod product;

pub use error::{ModelError, Result};
pub use ids::{CategoryID, ProductID};
pub use product::{
    DEFAULT_CURRENCY, NewProduct, Product, ProductImage, ValidatedProduct,
};
