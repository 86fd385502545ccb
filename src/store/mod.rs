//! Inventory stores: persistence for categories and products.
//!
//! The file-backed store keeps the whole inventory in one YAML document
//! and uses the `FileSystem` port for all I/O. Directory layout:
//!
//! ```text
//! <root>/
//!   └── inventory.yaml
//! ```
//!
//! Every operation reads the file, applies one change and writes it back.
//! There is no cross-process lock; the unique constraints are checked
//! against the document as read.

pub mod memory;
pub mod tables;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::context::ServiceContext;
use crate::error::StoreError;
use crate::model::{
    Category, CategoryId, NewProduct, Product, ProductChanges, ProductId, ProductListing,
};
use crate::ports::inventory::InventoryStore;
use crate::ports::records::{RecordStore, UniqueField};

pub use memory::MemoryStore;
pub use tables::Inventory;

/// File name of the inventory document inside the store root.
pub const INVENTORY_FILE: &str = "inventory.yaml";

/// Inventory persisted as YAML.
///
/// All I/O goes through `ctx.fs` and all timestamps through `ctx.clock`.
pub struct YamlStore<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
}

impl<'a> YamlStore<'a> {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, path: root.join(INVENTORY_FILE) }
    }

    /// Location of the inventory document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the inventory; a missing file is an empty inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Inventory, StoreError> {
        if !self.ctx.fs.exists(&self.path) {
            return Ok(Inventory::default());
        }
        let contents = self
            .ctx
            .fs
            .read_to_string(&self.path)
            .map_err(|source| StoreError::Read { path: self.path.clone(), source })?;
        serde_yaml::from_str(&contents)
            .map_err(|source| StoreError::Parse { path: self.path.clone(), source })
    }

    /// Writes the inventory back.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let yaml = serde_yaml::to_string(inventory).map_err(StoreError::Serialize)?;
        self.ctx
            .fs
            .write(&self.path, &yaml)
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })
    }

    fn read<T>(&self, f: impl FnOnce(&Inventory) -> T) -> Result<T, StoreError> {
        Ok(f(&self.load()?))
    }

    /// Applies `f` and saves only if it succeeded.
    fn change<T>(
        &self,
        f: impl FnOnce(&mut Inventory, DateTime<Utc>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut inventory = self.load()?;
        let out = f(&mut inventory, self.ctx.clock.now())?;
        self.save(&inventory)?;
        Ok(out)
    }
}

impl RecordStore for YamlStore<'_> {
    fn exists_by_field(
        &self,
        field: UniqueField,
        value: &str,
        exclude: Option<ProductId>,
    ) -> Result<bool, StoreError> {
        self.read(|inv| inv.exists_by_field(field, value, exclude))
    }
}

impl InventoryStore for YamlStore<'_> {
    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.read(|inv| inv.categories().to_vec())
    }

    fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        self.read(|inv| inv.category(id).cloned())
    }

    fn category_name_taken(
        &self,
        name: &str,
        exclude: Option<CategoryId>,
    ) -> Result<bool, StoreError> {
        self.read(|inv| inv.category_name_taken(name, exclude))
    }

    fn insert_category(&self, name: &str) -> Result<Category, StoreError> {
        self.change(|inv, now| Ok(inv.insert_category(name, now)))
    }

    fn rename_category(&self, id: CategoryId, name: &str) -> Result<Category, StoreError> {
        self.change(|inv, now| inv.rename_category(id, name, now))
    }

    fn delete_category(&self, id: CategoryId) -> Result<Category, StoreError> {
        self.change(|inv, _| inv.delete_category(id))
    }

    fn products(&self) -> Result<Vec<Product>, StoreError> {
        self.read(|inv| inv.products().to_vec())
    }

    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.read(|inv| inv.product(id).cloned())
    }

    fn listings(&self) -> Result<Vec<ProductListing>, StoreError> {
        self.read(Inventory::listings)
    }

    fn product_name_taken(
        &self,
        name: &str,
        exclude: Option<ProductId>,
    ) -> Result<bool, StoreError> {
        self.read(|inv| inv.product_name_taken(name, exclude))
    }

    fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        self.change(|inv, now| inv.insert_product(product, now))
    }

    fn update_product(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> Result<Product, StoreError> {
        self.change(|inv, now| inv.update_product(id, changes, now))
    }

    fn delete_product(&self, id: ProductId) -> Result<Product, StoreError> {
        self.change(|inv, _| inv.delete_product(id))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::adapters::manual::ManualClock;
    use crate::ident::IdentifierGenerator;
    use crate::store::tables::tests::{at, new_product};

    /// In-memory filesystem for testing the store without touching disk.
    #[derive(Default)]
    pub(crate) struct MemFs {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl crate::ports::filesystem::FileSystem for MemFs {
        fn read_to_string(
            &self,
            path: &Path,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .cloned()
                .ok_or_else(|| format!("File not found: {}", path.display()).into())
        }

        fn write(
            &self,
            path: &Path,
            contents: &str,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    pub(crate) fn make_test_context() -> ServiceContext {
        ServiceContext::new(Box::new(ManualClock::new(at(10))), Box::new(MemFs::default()))
    }

    #[test]
    fn missing_file_is_an_empty_inventory() {
        let ctx = make_test_context();
        let store = YamlStore::new(&ctx, Path::new("/store"));

        assert!(store.categories().unwrap().is_empty());
        assert!(store.listings().unwrap().is_empty());
        assert!(!ctx.fs.exists(store.path()));
    }

    #[test]
    fn writes_are_visible_to_a_second_store_on_the_same_root() {
        let ctx = make_test_context();
        let store = YamlStore::new(&ctx, Path::new("/store"));
        store.insert_category("herramientas").unwrap();
        store.insert_product(new_product("Martillo", "martillo", "MARTILLO", 1)).unwrap();

        let reopened = YamlStore::new(&ctx, Path::new("/store"));
        let listings = reopened.listings().unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].product.slug.as_str(), "martillo");
        assert_eq!(listings[0].category_label(), "Herramientas");
        assert_eq!(listings[0].product.created_at, at(10));

        let content = ctx.fs.read_to_string(Path::new("/store/inventory.yaml")).unwrap();
        assert!(content.contains("MARTILLO"));
    }

    #[test]
    fn failed_change_leaves_the_file_untouched() {
        let ctx = make_test_context();
        let store = YamlStore::new(&ctx, Path::new("/store"));
        store.insert_category("herramientas").unwrap();
        store.insert_product(new_product("Martillo", "martillo", "MARTILLO", 1)).unwrap();
        let before = ctx.fs.read_to_string(store.path()).unwrap();

        let err = store.insert_product(new_product("Otro", "martillo", "OTRO", 1)).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(ctx.fs.read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn generator_checks_against_the_file() {
        let ctx = make_test_context();
        let store = YamlStore::new(&ctx, Path::new("/store"));
        store.insert_category("herramientas").unwrap();
        store.insert_product(new_product("Martillo", "martillo", "MARTILLO", 1)).unwrap();

        let generator = IdentifierGenerator::new(&store);
        assert_eq!(generator.generate_slug("Martillo", None).unwrap().as_str(), "martillo-1");
        assert_eq!(generator.generate_sku("Martillo!", None).unwrap().as_str(), "MARTILLO001");
        assert_eq!(
            generator.generate_sku("Martillo", Some(ProductId(1))).unwrap().as_str(),
            "MARTILLO"
        );
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let ctx = make_test_context();
        let store = YamlStore::new(&ctx, Path::new("/store"));
        ctx.fs.write(store.path(), "categories: [oops").unwrap();

        let err = store.categories().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
