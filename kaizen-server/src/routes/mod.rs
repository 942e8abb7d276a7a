use axum::{Router, routing::get};

use crate::{AppState, handlers};

pub mod paths {
    pub const PRODUCTS: &str = "/products";
    pub const PRODUCT_BY_SLUG: &str = "/products/slug/{slug}";
}

/// Catalog routes. State is supplied by the caller.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(paths::PRODUCTS, get(handlers::list_products))
        .route(paths::PRODUCT_BY_SLUG, get(handlers::get_product_by_slug))
}
