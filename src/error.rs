//! Errors raised by record stores.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{CategoryId, ProductId};
use crate::ports::records::UniqueField;

/// Failure of a record store read or write.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write would duplicate a value in a unique column.
    ///
    /// Identifier generation checks uniqueness before the write, but the
    /// check and the write are separate steps, so a concurrent writer can
    /// take the value first. Callers regenerate and retry on this kind.
    #[error("{field} '{value}' is already taken")]
    UniqueViolation {
        /// Column that rejected the value.
        field: UniqueField,
        /// The duplicated value.
        value: String,
    },
    /// A product referenced a category that does not exist.
    #[error("category {0} does not exist")]
    MissingCategory(CategoryId),
    /// A category cannot be deleted while products still reference it.
    #[error("category {id} still has {products} product(s)")]
    CategoryInUse {
        /// The category that was to be deleted.
        id: CategoryId,
        /// How many products point at it.
        products: usize,
    },
    /// No category row with this identifier.
    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),
    /// No product row with this identifier.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
    /// The inventory file could not be read.
    #[error("failed to read inventory {}: {source}", path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The inventory file could not be written.
    #[error("failed to write inventory {}: {source}", path.display())]
    Write {
        /// File that was written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The inventory file is not valid YAML for the inventory layout.
    #[error("failed to parse inventory {}: {source}", path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Decoder failure.
        source: serde_yaml::Error,
    },
    /// The inventory could not be encoded.
    #[error("failed to serialize inventory: {0}")]
    Serialize(#[source] serde_yaml::Error),
    /// A writer panicked while holding the in-memory tables.
    #[error("inventory lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Whether this is a lost race on a unique column, which the caller may
    /// resolve by generating a fresh identifier.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}
