//! Product catalog records.
//!
//! [`Product`] is the stored, read-side shape returned by the catalog API.
//! [`NewProduct`] is the write-side payload: optional fields are filled with
//! their store defaults by [`NewProduct::validate`] before insertion.

use chrono::{DateTime, Utc};
use url::Url;

use crate::{
    error::{ModelError, Result},
    ids::{CategoryID, ProductID},
};

/// Currency applied when a product is created without one.
pub const DEFAULT_CURRENCY: &str = "LBP";

/// One ordered product image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductImage {
    pub url: String,
}

impl ProductImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Product {
    pub id: ProductID,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Minor currency units (cents).
    pub price: i64,
    pub currency: String,
    pub stock: i32,
    pub tags: Vec<String>,
    pub active: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub category_id: Option<CategoryID>,
    pub images: Vec<ProductImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload. Omitted fields take the catalog defaults:
/// currency `LBP`, stock `0`, no tags, active, no images.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewProduct {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub currency: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stock: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub active: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category_id: Option<CategoryID>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Option<Vec<ProductImage>>,
}

/// A creation payload that passed validation with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: i64,
    pub currency: String,
    pub stock: i32,
    pub tags: Vec<String>,
    pub active: bool,
    pub category_id: Option<CategoryID>,
    pub images: Vec<ProductImage>,
}

impl NewProduct {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        price: i64,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
            price,
            ..Self::default()
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_category(mut self, category: CategoryID) -> Self {
        self.category_id = Some(category);
        self
    }

    pub fn with_images<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images =
            Some(urls.into_iter().map(ProductImage::new).collect());
        self
    }

    /// Check required fields and bounds, then fill the defaults.
    pub fn validate(self) -> Result<ValidatedProduct> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ModelError::MissingField { field: "title" });
        }

        let slug = self.slug.trim().to_string();
        if slug.is_empty() {
            return Err(ModelError::MissingField { field: "slug" });
        }
        if !is_valid_slug(&slug) {
            return Err(ModelError::InvalidSlug(slug));
        }

        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(ModelError::MissingField {
                field: "description",
            });
        }

        if self.price < 0 {
            return Err(ModelError::Negative {
                field: "price",
                value: self.price,
            });
        }

        let stock = self.stock.unwrap_or(0);
        if stock < 0 {
            return Err(ModelError::Negative {
                field: "stock",
                value: i64::from(stock),
            });
        }

        let currency = self
            .currency
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let images = self.images.unwrap_or_default();
        for image in &images {
            Url::parse(&image.url).map_err(|e| {
                ModelError::InvalidImageUrl {
                    url: image.url.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(ValidatedProduct {
            title,
            slug,
            description,
            price: self.price,
            currency,
            stock,
            tags: self.tags.unwrap_or_default(),
            active: self.active.unwrap_or(true),
            category_id: self.category_id,
            images,
        })
    }
}

impl ValidatedProduct {
    /// Materialize a stored record with a fresh id and timestamps.
    pub fn into_product(self, now: DateTime<Utc>) -> Product {
        Product {
            id: ProductID::new(),
            title: self.title,
            slug: self.slug,
            description: self.description,
            price: self.price,
            currency: self.currency,
            stock: self.stock,
            tags: self.tags,
            active: self.active,
            category_id: self.category_id,
            images: self.images,
            created_at: now,
            updated_at: now,
        }
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
