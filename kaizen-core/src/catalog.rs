use std::{fmt, sync::Arc};

use kaizen_model::Product;
use tracing::debug;

use crate::{
    database::ports::products::ProductRepository,
    error::{CatalogError, Result},
};

/// Read-side catalog facade used by the HTTP handlers.
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub fn repository(&self) -> &Arc<dyn ProductRepository> {
        &self.products
    }

    /// Active products, newest first.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.products.list_active().await
    }

    /// The active product with `slug`; inactive and unknown slugs are both
    /// reported as [`CatalogError::NotFound`].
    pub async fn product_by_slug(&self, slug: &str) -> Result<Product> {
        match self.products.find_active_by_slug(slug).await? {
            Some(product) => Ok(product),
            None => {
                debug!(slug, "product lookup missed");
                Err(CatalogError::product_not_found())
            }
        }
    }
}
