use axum::{
    extract::{Path, State},
    response::Json,
};
use kaizen_model::Product;

use crate::infra::{app_state::AppState, errors::AppResult};

/// Active products, newest first.
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.catalog().list_products().await?;
    Ok(Json(products))
}

/// A single active product; unknown or inactive slugs answer 404.
pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.catalog().product_by_slug(&slug).await?;
    Ok(Json(product))
}
