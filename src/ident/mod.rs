//! Unique slug and SKU generation.
//!
//! Both identifiers start from a base token derived from the product name
//! and are suffixed until the record store reports no other product holding
//! the candidate:
//!
//! ```text
//! slug: base, base-1, base-2, ...
//! sku:  BASE, BASE001, BASE002, ..., BASE999, BASE1000, ...
//! ```
//!
//! The check reflects the store at the time it is made. Nothing is reserved,
//! so a concurrent writer can claim the same candidate before the caller
//! persists it; the store's unique constraint rejects the second write with
//! [`StoreError::UniqueViolation`] and the caller generates again.

pub mod normalize;

use tracing::debug;

use crate::error::StoreError;
use crate::model::{ProductId, Sku, Slug};
use crate::ports::records::{RecordStore, UniqueField};

pub use normalize::{sku_base, slug_base, slugify, SKU_FALLBACK, SLUG_FALLBACK};

/// Derives unique product identifiers against a [`RecordStore`].
pub struct IdentifierGenerator<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> IdentifierGenerator<'a, S> {
    /// Creates a generator reading from `store`.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Returns a slug for `name` that no product other than `exclude` holds.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store cannot be read.
    pub fn generate_slug(&self, name: &str, exclude: Option<ProductId>) -> Result<Slug, StoreError> {
        let base = slug_base(name);
        let value = self.first_free(UniqueField::Slug, &base, exclude, |n| format!("{base}-{n}"))?;
        Ok(Slug::new(value))
    }

    /// Returns a SKU for `name` that no product other than `exclude` holds.
    ///
    /// The suffix is zero-padded to three digits but not capped, so after
    /// 999 collisions it widens to four digits and beyond.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store cannot be read.
    pub fn generate_sku(&self, name: &str, exclude: Option<ProductId>) -> Result<Sku, StoreError> {
        let base = sku_base(name);
        let value = self.first_free(UniqueField::Sku, &base, exclude, |n| format!("{base}{n:03}"))?;
        Ok(Sku::new(value))
    }

    /// Tries `base`, then `suffixed(1)`, `suffixed(2)`, ... until one is free.
    fn first_free(
        &self,
        field: UniqueField,
        base: &str,
        exclude: Option<ProductId>,
        suffixed: impl Fn(u64) -> String,
    ) -> Result<String, StoreError> {
        let mut candidate = base.to_string();
        let mut attempt: u64 = 1;
        while self.store.exists_by_field(field, &candidate, exclude)? {
            debug!(%field, candidate = %candidate, attempt, "identifier taken");
            candidate = suffixed(attempt);
            attempt += 1;
        }
        Ok(candidate)
    }
}
