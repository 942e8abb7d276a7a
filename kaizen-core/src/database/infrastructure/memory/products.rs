use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use kaizen_model::{NewProduct, Product};
use parking_lot::RwLock;

use crate::database::ports::products::ProductRepository;
use crate::error::{CatalogError, Result};

#[derive(Debug, Default)]
struct Store {
    // Insertion order doubles as the tie-breaker for equal timestamps.
    rows: Vec<(u64, Product)>,
    next_seq: u64,
}

/// Process-local catalog store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fully formed record as-is (fixtures with fixed timestamps).
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let repo = Self::new();
        {
            let mut store = repo.store.write();
            for product in products {
                let seq = store.next_seq;
                store.next_seq += 1;
                store.rows.push((seq, product));
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.store.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_active(&self) -> Result<Vec<Product>> {
        let store = self.store.read();
        let mut active: Vec<&(u64, Product)> =
            store.rows.iter().filter(|(_, p)| p.active).collect();
        active.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
        });
        Ok(active.into_iter().map(|(_, p)| p.clone()).collect())
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let store = self.store.read();
        Ok(store
            .rows
            .iter()
            .map(|(_, p)| p)
            .find(|p| p.active && p.slug == slug)
            .cloned())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product> {
        let product = product.validate()?.into_product(Utc::now());

        let mut store = self.store.write();
        if store.rows.iter().any(|(_, p)| p.slug == product.slug) {
            return Err(CatalogError::Conflict(format!(
                "slug '{}' already exists",
                product.slug
            )));
        }
        let seq = store.next_seq;
        store.next_seq += 1;
        store.rows.push((seq, product.clone()));
        Ok(product)
    }

    async fn delete_by_slugs(&self, slugs: &[String]) -> Result<u64> {
        let mut store = self.store.write();
        let before = store.rows.len();
        store.rows.retain(|(_, p)| !slugs.contains(&p.slug));
        Ok((before - store.rows.len()) as u64)
    }
}
