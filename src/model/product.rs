//! Products and the write payloads the store accepts for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::codes::{Sku, Slug};
use super::ids::{CategoryId, ProductId};
use super::price::Price;

/// A stocked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    pub price: Price,
    /// Whether the product is offered.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Unique stock keeping unit.
    pub sku: Sku,
    /// Unique URL token.
    pub slug: Slug,
    /// Image location, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the product is highlighted.
    #[serde(default)]
    pub is_featured: bool,
    /// Units on hand.
    #[serde(default)]
    pub stock: u32,
    /// Page views.
    #[serde(default)]
    pub views: u32,
    /// Units sold.
    #[serde(default)]
    pub sales: u32,
    /// Sum of ratings received.
    #[serde(default)]
    pub rating: u32,
    /// Number of ratings received.
    #[serde(default)]
    pub rating_count: u32,
    /// Owning category.
    pub category_id: CategoryId,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last written.
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Fields supplied when inserting a product; everything else takes its
/// column default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Price,
    /// Generated SKU.
    pub sku: Sku,
    /// Generated slug.
    pub slug: Slug,
    /// Owning category.
    pub category_id: CategoryId,
}

/// Fields rewritten by an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductChanges {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// SKU, regenerated or carried over.
    pub sku: Sku,
    /// Slug, regenerated or carried over.
    pub slug: Slug,
    /// Owning category.
    pub category_id: CategoryId,
}

/// A product read together with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListing {
    /// The product row.
    #[serde(flatten)]
    pub product: Product,
    /// The category it points at, when that row still exists.
    pub category: Option<Category>,
}

impl ProductListing {
    /// Category name, or `—` when there is none.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_ref().map_or("—", |c| c.name.as_str())
    }
}
