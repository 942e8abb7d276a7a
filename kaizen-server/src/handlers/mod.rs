//! HTTP request handlers organized by functionality

pub mod products;

pub use products::{get_product_by_slug, list_products};
