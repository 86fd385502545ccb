//! Record store port consulted by identifier generation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::ProductId;

/// Product columns that carry a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqueField {
    /// The URL slug.
    Slug,
    /// The stock keeping unit.
    Sku,
}

impl UniqueField {
    /// Column name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::Sku => "sku",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers whether a product already holds a value in a unique column.
///
/// This is the only capability identifier generation needs, so tests and
/// callers can hand the generator anything from a full inventory store to a
/// fixed set of taken values.
pub trait RecordStore: Send + Sync {
    /// Returns `true` if some product other than `exclude` has `value` in
    /// `field`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying records cannot be read.
    fn exists_by_field(
        &self,
        field: UniqueField,
        value: &str,
        exclude: Option<ProductId>,
    ) -> Result<bool, StoreError>;
}
