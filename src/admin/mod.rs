//! Admin operations behind the category and product screens.
//!
//! Each operation validates its form, writes through an
//! [`InventoryStore`](crate::ports::InventoryStore) and returns the written
//! row. Callers re-read the list with `list()` after a successful write.

pub mod categories;
pub mod products;
pub mod validate;

use thiserror::Error;

use crate::error::StoreError;
use crate::model::{CategoryId, ProductId};

pub use categories::{CategoryAdmin, CATEGORY_NAME_MAX};
pub use products::{ProductAdmin, ProductForm, MAX_WRITE_ATTEMPTS, PRODUCT_NAME_MAX};
pub use validate::ValidationErrors;

/// Failure of an admin operation.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The form broke one or more rules.
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),
    /// The selected product does not exist.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
    /// The selected category does not exist.
    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),
    /// The store failed or rejected the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}
