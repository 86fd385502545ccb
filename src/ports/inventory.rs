//! Inventory store port: category and product persistence.

use crate::error::StoreError;
use crate::model::{
    Category, CategoryId, NewProduct, Product, ProductChanges, ProductId, ProductListing,
};

use super::records::RecordStore;

/// Persistence for categories and products.
///
/// Implementations enforce the storage-level constraints: product slugs and
/// SKUs are unique, products point at an existing category, and a category
/// cannot be removed while products reference it. Timestamps are assigned by
/// the implementation.
pub trait InventoryStore: RecordStore {
    /// All categories in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Looks up one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;

    /// Whether another category already uses `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn category_name_taken(
        &self,
        name: &str,
        exclude: Option<CategoryId>,
    ) -> Result<bool, StoreError>;

    /// Inserts a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read or written.
    fn insert_category(&self, name: &str) -> Result<Category, StoreError>;

    /// Renames a category.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CategoryNotFound`] for an unknown id, or an I/O
    /// error.
    fn rename_category(&self, id: CategoryId, name: &str) -> Result<Category, StoreError>;

    /// Deletes a category that no product references.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CategoryInUse`] while products point at it,
    /// [`StoreError::CategoryNotFound`] for an unknown id, or an I/O error.
    fn delete_category(&self, id: CategoryId) -> Result<Category, StoreError>;

    /// All products in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn products(&self) -> Result<Vec<Product>, StoreError>;

    /// Looks up one product.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// All products with their categories, in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn listings(&self) -> Result<Vec<ProductListing>, StoreError>;

    /// Whether another product already uses `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn product_name_taken(&self, name: &str, exclude: Option<ProductId>)
        -> Result<bool, StoreError>;

    /// Inserts a product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the slug or SKU is taken,
    /// [`StoreError::MissingCategory`] for an unknown category, or an I/O
    /// error.
    fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// Rewrites the editable fields of a product.
    ///
    /// # Errors
    ///
    /// Same as [`InventoryStore::insert_product`], plus
    /// [`StoreError::ProductNotFound`] for an unknown id.
    fn update_product(&self, id: ProductId, changes: ProductChanges)
        -> Result<Product, StoreError>;

    /// Deletes a product and returns the removed row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] for an unknown id, or an I/O
    /// error.
    fn delete_product(&self, id: ProductId) -> Result<Product, StoreError>;
}
