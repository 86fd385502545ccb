//! Category and product tables with their constraints.
//!
//! [`Inventory`] is the whole data set held by a store. The in-memory store
//! keeps one behind a mutex; the YAML store loads one, applies a change and
//! writes it back. Either way the rules live here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::{
    capitalize_name, Category, CategoryId, NewProduct, Product, ProductChanges, ProductId,
    ProductListing,
};
use crate::ports::records::UniqueField;

/// All categories and products, plus the id counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    last_category_id: u64,
    #[serde(default)]
    last_product_id: u64,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    products: Vec<Product>,
}

impl Inventory {
    /// Categories in id order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Whether a category other than `exclude` is called `name`.
    #[must_use]
    pub fn category_name_taken(&self, name: &str, exclude: Option<CategoryId>) -> bool {
        self.categories.iter().any(|c| c.name == name && Some(c.id) != exclude)
    }

    /// Adds a category; the name is stored in capitalized form.
    pub fn insert_category(&mut self, name: &str, now: DateTime<Utc>) -> Category {
        let max_existing = self.categories.iter().map(|c| c.id.0).max().unwrap_or(0);
        self.last_category_id = self.last_category_id.max(max_existing) + 1;
        let category = Category {
            id: CategoryId(self.last_category_id),
            name: capitalize_name(name),
            created_at: now,
            updated_at: now,
        };
        self.categories.push(category.clone());
        category
    }

    /// Renames a category.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CategoryNotFound`] for an unknown id.
    pub fn rename_category(
        &mut self,
        id: CategoryId,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Category, StoreError> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::CategoryNotFound(id))?;
        category.name = capitalize_name(name);
        category.updated_at = now;
        Ok(category.clone())
    }

    /// Removes a category nobody references.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CategoryInUse`] while products point at it, or
    /// [`StoreError::CategoryNotFound`] for an unknown id.
    pub fn delete_category(&mut self, id: CategoryId) -> Result<Category, StoreError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::CategoryNotFound(id))?;
        let products = self.products.iter().filter(|p| p.category_id == id).count();
        if products > 0 {
            return Err(StoreError::CategoryInUse { id, products });
        }
        Ok(self.categories.remove(index))
    }

    /// Products in id order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products joined with their categories.
    #[must_use]
    pub fn listings(&self) -> Vec<ProductListing> {
        self.products
            .iter()
            .map(|product| ProductListing {
                product: product.clone(),
                category: self.category(product.category_id).cloned(),
            })
            .collect()
    }

    /// Whether a product other than `exclude` is called `name`.
    #[must_use]
    pub fn product_name_taken(&self, name: &str, exclude: Option<ProductId>) -> bool {
        self.products.iter().any(|p| p.name == name && Some(p.id) != exclude)
    }

    /// Whether a product other than `exclude` holds `value` in `field`.
    #[must_use]
    pub fn exists_by_field(
        &self,
        field: UniqueField,
        value: &str,
        exclude: Option<ProductId>,
    ) -> bool {
        self.products.iter().any(|p| {
            let held = match field {
                UniqueField::Slug => p.slug.as_str(),
                UniqueField::Sku => p.sku.as_str(),
            };
            held == value && Some(p.id) != exclude
        })
    }

    /// Adds a product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] for a taken slug or SKU, or
    /// [`StoreError::MissingCategory`] for an unknown category.
    pub fn insert_product(
        &mut self,
        new: NewProduct,
        now: DateTime<Utc>,
    ) -> Result<Product, StoreError> {
        self.check_category(new.category_id)?;
        self.check_unique(UniqueField::Slug, new.slug.as_str(), None)?;
        self.check_unique(UniqueField::Sku, new.sku.as_str(), None)?;

        let max_existing = self.products.iter().map(|p| p.id.0).max().unwrap_or(0);
        self.last_product_id = self.last_product_id.max(max_existing) + 1;
        let product = Product {
            id: ProductId(self.last_product_id),
            name: new.name,
            description: new.description,
            price: new.price,
            is_active: true,
            sku: new.sku,
            slug: new.slug,
            image: None,
            is_featured: false,
            stock: 0,
            views: 0,
            sales: 0,
            rating: 0,
            rating_count: 0,
            category_id: new.category_id,
            created_at: now,
            updated_at: now,
        };
        self.products.push(product.clone());
        Ok(product)
    }

    /// Rewrites the editable fields of a product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`], [`StoreError::UniqueViolation`]
    /// or [`StoreError::MissingCategory`].
    pub fn update_product(
        &mut self,
        id: ProductId,
        changes: ProductChanges,
        now: DateTime<Utc>,
    ) -> Result<Product, StoreError> {
        if self.product(id).is_none() {
            return Err(StoreError::ProductNotFound(id));
        }
        self.check_category(changes.category_id)?;
        self.check_unique(UniqueField::Slug, changes.slug.as_str(), Some(id))?;
        self.check_unique(UniqueField::Sku, changes.sku.as_str(), Some(id))?;

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))?;
        product.name = changes.name;
        product.price = changes.price;
        product.sku = changes.sku;
        product.slug = changes.slug;
        product.category_id = changes.category_id;
        product.updated_at = now;
        Ok(product.clone())
    }

    /// Removes a product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] for an unknown id.
    pub fn delete_product(&mut self, id: ProductId) -> Result<Product, StoreError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))?;
        Ok(self.products.remove(index))
    }

    fn check_category(&self, id: CategoryId) -> Result<(), StoreError> {
        if self.category(id).is_none() {
            return Err(StoreError::MissingCategory(id));
        }
        Ok(())
    }

    fn check_unique(
        &self,
        field: UniqueField,
        value: &str,
        exclude: Option<ProductId>,
    ) -> Result<(), StoreError> {
        if self.exists_by_field(field, value, exclude) {
            return Err(StoreError::UniqueViolation { field, value: value.to_string() });
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::{Price, Sku, Slug};

    pub(crate) fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 11, hour, 0, 0).unwrap()
    }

    pub(crate) fn new_product(name: &str, slug: &str, sku: &str, category: u64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price: Price::parse("1500").unwrap(),
            sku: Sku::new(sku),
            slug: Slug::new(slug),
            category_id: CategoryId(category),
        }
    }

    fn with_category() -> Inventory {
        let mut inventory = Inventory::default();
        inventory.insert_category("muebles", at(1));
        inventory
    }

    #[test]
    fn ids_increase_and_are_not_reused() {
        let mut inventory = with_category();
        let first = inventory.insert_product(new_product("Mesa", "mesa", "MESA", 1), at(2)).unwrap();
        inventory.delete_product(first.id).unwrap();
        let second =
            inventory.insert_product(new_product("Silla", "silla", "SILLA", 1), at(3)).unwrap();
        assert_eq!(first.id, ProductId(1));
        assert_eq!(second.id, ProductId(2));
    }

    #[test]
    fn category_names_are_capitalized() {
        let inventory = with_category();
        assert_eq!(inventory.categories()[0].name, "Muebles");
        assert!(inventory.category_name_taken("Muebles", None));
        assert!(!inventory.category_name_taken("Muebles", Some(CategoryId(1))));
    }

    #[test]
    fn new_products_take_column_defaults() {
        let mut inventory = with_category();
        let product =
            inventory.insert_product(new_product("Mesa", "mesa", "MESA", 1), at(2)).unwrap();
        assert!(product.is_active);
        assert!(!product.is_featured);
        assert_eq!(product.stock, 0);
        assert_eq!(product.created_at, at(2));
        assert_eq!(product.updated_at, at(2));
    }

    #[test]
    fn duplicate_slug_is_a_unique_violation() {
        let mut inventory = with_category();
        inventory.insert_product(new_product("Mesa", "mesa", "MESA", 1), at(2)).unwrap();
        let err =
            inventory.insert_product(new_product("Mesa 2", "mesa", "MESA2", 1), at(2)).unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { field: UniqueField::Slug, .. }));
    }

    #[test]
    fn duplicate_sku_is_a_unique_violation() {
        let mut inventory = with_category();
        inventory.insert_product(new_product("Mesa", "mesa", "MESA", 1), at(2)).unwrap();
        let err = inventory
            .insert_product(new_product("Mesa!", "mesa-1", "MESA", 1), at(2))
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { field: UniqueField::Sku, .. }));
        assert_eq!(inventory.products().len(), 1);
    }

    #[test]
    fn product_requires_existing_category() {
        let mut inventory = with_category();
        let err =
            inventory.insert_product(new_product("Mesa", "mesa", "MESA", 9), at(2)).unwrap_err();
        assert!(matches!(err, StoreError::MissingCategory(CategoryId(9))));
    }

    #[test]
    fn update_may_keep_its_own_identifiers() {
        let mut inventory = with_category();
        let product =
            inventory.insert_product(new_product("Mesa", "mesa", "MESA", 1), at(2)).unwrap();
        let changes = ProductChanges {
            name: "Mesa".into(),
            price: Price::parse("2000").unwrap(),
            sku: product.sku.clone(),
            slug: product.slug.clone(),
            category_id: CategoryId(1),
        };
        let updated = inventory.update_product(product.id, changes, at(5)).unwrap();
        assert_eq!(updated.price.cents(), 200_000);
        assert_eq!(updated.created_at, at(2));
        assert_eq!(updated.updated_at, at(5));
    }

    #[test]
    fn update_cannot_take_another_products_slug() {
        let mut inventory = with_category();
        inventory.insert_product(new_product("Mesa", "mesa", "MESA", 1), at(2)).unwrap();
        let silla =
            inventory.insert_product(new_product("Silla", "silla", "SILLA", 1), at(2)).unwrap();
        let changes = ProductChanges {
            name: "Silla".into(),
            price: silla.price,
            sku: silla.sku.clone(),
            slug: Slug::new("mesa"),
            category_id: CategoryId(1),
        };
        let err = inventory.update_product(silla.id, changes, at(3)).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn category_delete_is_restricted_while_referenced() {
        let mut inventory = with_category();
        let product =
            inventory.insert_product(new_product("Mesa", "mesa", "MESA", 1), at(2)).unwrap();
        let err = inventory.delete_category(CategoryId(1)).unwrap_err();
        assert!(matches!(err, StoreError::CategoryInUse { products: 1, .. }));

        inventory.delete_product(product.id).unwrap();
        assert_eq!(inventory.delete_category(CategoryId(1)).unwrap().name, "Muebles");
        assert!(inventory.categories().is_empty());
    }

    #[test]
    fn listings_join_categories() {
        let mut inventory = with_category();
        inventory.insert_product(new_product("Mesa", "mesa", "MESA", 1), at(2)).unwrap();
        let listings = inventory.listings();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].category_label(), "Muebles");
    }

    #[test]
    fn unknown_rows_report_not_found() {
        let mut inventory = with_category();
        assert!(matches!(
            inventory.rename_category(CategoryId(5), "x", at(1)),
            Err(StoreError::CategoryNotFound(CategoryId(5)))
        ));
        assert!(matches!(
            inventory.delete_product(ProductId(5)),
            Err(StoreError::ProductNotFound(ProductId(5)))
        ));
    }
}
