use async_trait::async_trait;
use kaizen_model::{NewProduct, Product};

use crate::error::Result;

/// Persistence port for the product catalog.
///
/// Reads only ever see active products. Slug uniqueness is enforced by the
/// store; inserting a duplicate slug yields `CatalogError::Conflict`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Active products, newest first.
    async fn list_active(&self) -> Result<Vec<Product>>;

    /// The active product with `slug`, if any.
    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Product>>;

    /// Validate, default and store a new product.
    async fn insert(&self, product: NewProduct) -> Result<Product>;

    /// Remove every product (active or not) whose slug is listed.
    /// Returns the number of removed rows.
    async fn delete_by_slugs(&self, slugs: &[String]) -> Result<u64>;
}
