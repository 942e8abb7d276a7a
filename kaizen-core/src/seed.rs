//! Demo catalog fixtures.
//!
//! Reseeding removes the demo slugs first and then inserts the records again,
//! so running it twice leaves exactly one copy of each.

use kaizen_model::{NewProduct, Product};
use tracing::info;

use crate::{database::ports::products::ProductRepository, error::Result};

/// Slugs owned by the demo seed.
pub const DEMO_SLUGS: [&str; 3] =
    ["camping-tent-2p", "scout-backpack-40l", "size-5-football"];

fn picsum(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/600/600")
}

/// The fixed demo records, in insertion order.
pub fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new(
            "Camping Tent 2P",
            "camping-tent-2p",
            "Lightweight 2-person tent.",
            2_500_000,
        )
        .with_currency("LBP")
        .with_stock(12)
        .with_tags(["camping", "tent"])
        .with_images([picsum("tent")])
        .with_active(true),
        NewProduct::new(
            "Scout Backpack 40L",
            "scout-backpack-40l",
            "Durable 40L pack.",
            1_800_000,
        )
        .with_currency("LBP")
        .with_stock(20)
        .with_tags(["scout", "backpack"])
        .with_images([picsum("backpack")])
        .with_active(true),
        NewProduct::new(
            "Size 5 Football",
            "size-5-football",
            "Match-quality ball.",
            900_000,
        )
        .with_currency("LBP")
        .with_stock(30)
        .with_tags(["sports", "football"])
        .with_images([picsum("ball")])
        .with_active(true),
    ]
}

#[derive(Debug, Clone)]
pub struct SeedReport {
    pub removed: u64,
    pub inserted: Vec<Product>,
}

/// Remove and reinsert the demo records by slug.
pub async fn reseed_demo_catalog(
    repo: &dyn ProductRepository,
) -> Result<SeedReport> {
    let slugs: Vec<String> = DEMO_SLUGS.iter().map(|s| s.to_string()).collect();
    let removed = repo.delete_by_slugs(&slugs).await?;

    let mut inserted = Vec::with_capacity(DEMO_SLUGS.len());
    for product in demo_products() {
        inserted.push(repo.insert(product).await?);
    }

    info!(removed, inserted = inserted.len(), "demo catalog seeded");
    Ok(SeedReport { removed, inserted })
}
