use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kaizen_model::{CategoryID, NewProduct, Product, ProductID, ProductImage};
use serde_json::Value;
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::debug;
use uuid::Uuid;

use crate::database::ports::products::ProductRepository;
use crate::error::{CatalogError, Result};

const PRODUCT_COLUMNS: &str = r#"
    id, title, slug, description, price, currency, stock, tags, active,
    category_id, images, created_at, updated_at
"#;

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn map_row(row: &PgRow) -> Result<Product> {
        let read = |col: &str, e: sqlx::Error| {
            CatalogError::Internal(format!("Failed to read product {col}: {e}"))
        };

        let id: Uuid = row.try_get("id").map_err(|e| read("id", e))?;
        let category_id: Option<Uuid> = row
            .try_get("category_id")
            .map_err(|e| read("category_id", e))?;
        let images: Value =
            row.try_get("images").map_err(|e| read("images", e))?;
        let images: Vec<ProductImage> = serde_json::from_value(images)
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Invalid product images payload: {e}"
                ))
            })?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| read("created_at", e))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(|e| read("updated_at", e))?;

        Ok(Product {
            id: ProductID(id),
            title: row.try_get("title").map_err(|e| read("title", e))?,
            slug: row.try_get("slug").map_err(|e| read("slug", e))?,
            description: row
                .try_get("description")
                .map_err(|e| read("description", e))?,
            price: row.try_get("price").map_err(|e| read("price", e))?,
            currency: row
                .try_get("currency")
                .map_err(|e| read("currency", e))?,
            stock: row.try_get("stock").map_err(|e| read("stock", e))?,
            tags: row.try_get("tags").map_err(|e| read("tags", e))?,
            active: row.try_get("active").map_err(|e| read("active", e))?,
            category_id: category_id.map(CategoryID),
            images,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn list_active(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE active
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to list products: {e}"))
        })?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE slug = $1 AND active
            "#
        ))
        .bind(slug)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!(
                "Failed to load product by slug: {e}"
            ))
        })?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn insert(&self, product: NewProduct) -> Result<Product> {
        let product = product.validate()?.into_product(Utc::now());
        let images = serde_json::to_value(&product.images)?;

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO products (
                id, title, slug, description, price, currency, stock, tags,
                active, category_id, images, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.id.to_uuid())
        .bind(&product.title)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.currency)
        .bind(product.stock)
        .bind(&product.tags)
        .bind(product.active)
        .bind(product.category_id.map(|c| c.to_uuid()))
        .bind(images)
        .bind(product.created_at)
        .fetch_one(self.pool())
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                CatalogError::Conflict(format!(
                    "slug '{}' already exists",
                    product.slug
                ))
            }
            _ => CatalogError::Internal(format!(
                "Failed to insert product: {e}"
            )),
        })?;

        debug!(slug = %product.slug, "product inserted");
        Self::map_row(&row)
    }

    async fn delete_by_slugs(&self, slugs: &[String]) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE slug = ANY($1)
            "#,
        )
        .bind(slugs)
        .execute(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to delete products: {e}"))
        })?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(slug: &str) -> NewProduct {
        NewProduct::new("Test product", slug, "A product.", 500)
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn insert_applies_defaults_and_round_trips(pool: PgPool) {
        let repo = PostgresProductRepository::new(pool);
        let stored = repo.insert(product("plain")).await.unwrap();

        assert_eq!(stored.currency, "LBP");
        assert_eq!(stored.stock, 0);
        assert!(stored.active);
        assert!(stored.tags.is_empty());
        assert!(stored.images.is_empty());

        let found = repo.find_active_by_slug("plain").await.unwrap().unwrap();
        assert_eq!(found.id, stored.id);
        assert_eq!(found.description, "A product.");
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn inactive_products_are_invisible(pool: PgPool) {
        let repo = PostgresProductRepository::new(pool);
        repo.insert(product("hidden").with_active(false))
            .await
            .unwrap();
        repo.insert(product("shown")).await.unwrap();

        assert!(repo.find_active_by_slug("hidden").await.unwrap().is_none());
        let listed = repo.list_active().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].slug, "shown");
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn list_is_newest_first(pool: PgPool) {
        let repo = PostgresProductRepository::new(pool);
        repo.insert(product("older")).await.unwrap();
        repo.insert(product("newer")).await.unwrap();

        let slugs: Vec<String> = repo
            .list_active()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, vec!["newer", "older"]);
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn duplicate_slug_maps_to_conflict(pool: PgPool) {
        let repo = PostgresProductRepository::new(pool);
        repo.insert(product("dupe")).await.unwrap();
        let err = repo.insert(product("dupe")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn images_and_tags_survive_storage(pool: PgPool) {
        let repo = PostgresProductRepository::new(pool);
        repo.insert(
            product("ball")
                .with_tags(["sports", "football"])
                .with_images([
                    "https://picsum.photos/seed/ball/600/600",
                    "https://picsum.photos/seed/ball2/600/600",
                ]),
        )
        .await
        .unwrap();

        let found = repo.find_active_by_slug("ball").await.unwrap().unwrap();
        assert_eq!(found.tags, vec!["sports", "football"]);
        assert_eq!(
            found.images,
            vec![
                ProductImage::new("https://picsum.photos/seed/ball/600/600"),
                ProductImage::new("https://picsum.photos/seed/ball2/600/600"),
            ]
        );
    }
}
