//! In-process inventory store.

use std::sync::{Mutex, MutexGuard};

use crate::adapters::live::LiveClock;
use crate::error::StoreError;
use crate::model::{
    Category, CategoryId, NewProduct, Product, ProductChanges, ProductId, ProductListing,
};
use crate::ports::clock::Clock;
use crate::ports::inventory::InventoryStore;
use crate::ports::records::{RecordStore, UniqueField};

use super::tables::Inventory;

/// Inventory held in memory behind a mutex.
///
/// Each call locks the tables for its own duration only. Identifier
/// generation followed by an insert is still two calls, so the unique
/// constraints are what keeps racing writers apart.
pub struct MemoryStore {
    tables: Mutex<Inventory>,
    clock: Box<dyn Clock>,
}

impl MemoryStore {
    /// Creates an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Box::new(LiveClock))
    }

    /// Creates an empty store stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { tables: Mutex::new(Inventory::default()), clock }
    }

    fn tables(&self) -> Result<MutexGuard<'_, Inventory>, StoreError> {
        self.tables.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn exists_by_field(
        &self,
        field: UniqueField,
        value: &str,
        exclude: Option<ProductId>,
    ) -> Result<bool, StoreError> {
        Ok(self.tables()?.exists_by_field(field, value, exclude))
    }
}

impl InventoryStore for MemoryStore {
    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables()?.categories().to_vec())
    }

    fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.tables()?.category(id).cloned())
    }

    fn category_name_taken(
        &self,
        name: &str,
        exclude: Option<CategoryId>,
    ) -> Result<bool, StoreError> {
        Ok(self.tables()?.category_name_taken(name, exclude))
    }

    fn insert_category(&self, name: &str) -> Result<Category, StoreError> {
        Ok(self.tables()?.insert_category(name, self.clock.now()))
    }

    fn rename_category(&self, id: CategoryId, name: &str) -> Result<Category, StoreError> {
        self.tables()?.rename_category(id, name, self.clock.now())
    }

    fn delete_category(&self, id: CategoryId) -> Result<Category, StoreError> {
        self.tables()?.delete_category(id)
    }

    fn products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.tables()?.products().to_vec())
    }

    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.tables()?.product(id).cloned())
    }

    fn listings(&self) -> Result<Vec<ProductListing>, StoreError> {
        Ok(self.tables()?.listings())
    }

    fn product_name_taken(
        &self,
        name: &str,
        exclude: Option<ProductId>,
    ) -> Result<bool, StoreError> {
        Ok(self.tables()?.product_name_taken(name, exclude))
    }

    fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        self.tables()?.insert_product(product, self.clock.now())
    }

    fn update_product(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> Result<Product, StoreError> {
        self.tables()?.update_product(id, changes, self.clock.now())
    }

    fn delete_product(&self, id: ProductId) -> Result<Product, StoreError> {
        self.tables()?.delete_product(id)
    }
}
