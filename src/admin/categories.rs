//! Category screen operations.

use tracing::info;

use crate::error::StoreError;
use crate::model::{capitalize_name, Category, CategoryId};
use crate::ports::inventory::InventoryStore;

use super::validate::ValidationErrors;
use super::AdminError;

/// Longest accepted category name, in characters.
pub const CATEGORY_NAME_MAX: usize = 25;

/// Create, rename and delete categories.
pub struct CategoryAdmin<'a, S: InventoryStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: InventoryStore + ?Sized> CategoryAdmin<'a, S> {
    /// Creates the admin over `store`.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Category>, AdminError> {
        Ok(self.store.categories()?)
    }

    /// Validates `name` and adds a category.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Invalid`] when the name is blank, too long or
    /// already used, or a store error.
    pub fn create(&self, name: &str) -> Result<Category, AdminError> {
        let name = self.validate(name, None)?;
        let category = self.store.insert_category(&name)?;
        info!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Validates `name` and renames category `id`.
    ///
    /// Keeping the current name is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::CategoryNotFound`], [`AdminError::Invalid`] or a
    /// store error.
    pub fn rename(&self, id: CategoryId, name: &str) -> Result<Category, AdminError> {
        if self.store.category(id)?.is_none() {
            return Err(AdminError::CategoryNotFound(id));
        }
        let name = self.validate(name, Some(id))?;
        let category = self.store.rename_category(id, &name)?;
        info!(id = %category.id, name = %category.name, "category renamed");
        Ok(category)
    }

    /// Deletes category `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::CategoryNotFound`], or
    /// [`StoreError::CategoryInUse`] while products reference it.
    pub fn delete(&self, id: CategoryId) -> Result<Category, AdminError> {
        let category = self.store.delete_category(id).map_err(|err| match err {
            StoreError::CategoryNotFound(id) => AdminError::CategoryNotFound(id),
            other => AdminError::Store(other),
        })?;
        info!(id = %category.id, name = %category.name, "category deleted");
        Ok(category)
    }

    fn validate(&self, name: &str, exclude: Option<CategoryId>) -> Result<String, AdminError> {
        let name = capitalize_name(name);
        let mut errors = ValidationErrors::default();
        if name.is_empty() {
            errors.add("name", "The name is required.");
        } else if name.chars().count() > CATEGORY_NAME_MAX {
            errors.add("name", format!("At most {CATEGORY_NAME_MAX} characters are allowed."));
        } else if self.store.category_name_taken(&name, exclude)? {
            errors.add("name", "A category with this name already exists.");
        }
        errors.into_result()?;
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tables::tests::new_product;
    use crate::store::MemoryStore;

    #[test]
    fn create_stores_capitalized_name() {
        let store = MemoryStore::new();
        let category = CategoryAdmin::new(&store).create("  ELECTRÓNICA ").unwrap();
        assert_eq!(category.name, "Electrónica");
        assert_eq!(category.id, CategoryId(1));
    }

    #[test]
    fn blank_name_is_required() {
        let store = MemoryStore::new();
        let err = CategoryAdmin::new(&store).create("   ").unwrap_err();
        let AdminError::Invalid(errors) = err else { panic!("expected validation error") };
        assert_eq!(errors.field("name"), ["The name is required."]);
    }

    #[test]
    fn long_name_is_rejected() {
        let store = MemoryStore::new();
        let err = CategoryAdmin::new(&store).create(&"a".repeat(26)).unwrap_err();
        let AdminError::Invalid(errors) = err else { panic!("expected validation error") };
        assert_eq!(errors.field("name"), ["At most 25 characters are allowed."]);
        assert!(CategoryAdmin::new(&store).create(&"a".repeat(25)).is_ok());
    }

    #[test]
    fn duplicate_name_is_rejected_case_insensitively_after_normalizing() {
        let store = MemoryStore::new();
        let admin = CategoryAdmin::new(&store);
        admin.create("Ropa").unwrap();
        let err = admin.create("ROPA").unwrap_err();
        let AdminError::Invalid(errors) = err else { panic!("expected validation error") };
        assert_eq!(errors.field("name"), ["A category with this name already exists."]);
    }

    #[test]
    fn rename_may_keep_the_same_name() {
        let store = MemoryStore::new();
        let admin = CategoryAdmin::new(&store);
        let ropa = admin.create("Ropa").unwrap();
        admin.create("Calzado").unwrap();

        assert_eq!(admin.rename(ropa.id, "ropa").unwrap().name, "Ropa");
        assert!(matches!(admin.rename(ropa.id, "calzado"), Err(AdminError::Invalid(_))));
        assert!(matches!(
            admin.rename(CategoryId(42), "Otra"),
            Err(AdminError::CategoryNotFound(CategoryId(42)))
        ));
    }

    #[test]
    fn delete_is_refused_while_products_remain() {
        let store = MemoryStore::new();
        let admin = CategoryAdmin::new(&store);
        let ropa = admin.create("Ropa").unwrap();
        store.insert_product(new_product("Polera", "polera", "POLERA", 1)).unwrap();

        let err = admin.delete(ropa.id).unwrap_err();
        assert!(matches!(err, AdminError::Store(StoreError::CategoryInUse { products: 1, .. })));
        assert_eq!(admin.list().unwrap().len(), 1);
    }

    #[test]
    fn delete_unknown_category() {
        let store = MemoryStore::new();
        assert!(matches!(
            CategoryAdmin::new(&store).delete(CategoryId(3)),
            Err(AdminError::CategoryNotFound(CategoryId(3)))
        ));
    }
}
