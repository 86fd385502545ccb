//! Product screen operations.

use tracing::{info, warn};

use crate::error::StoreError;
use crate::ident::IdentifierGenerator;
use crate::model::{
    capitalize_name, CategoryId, NewProduct, Price, PriceError, Product, ProductChanges,
    ProductId, ProductListing, Sku, Slug,
};
use crate::ports::inventory::InventoryStore;

use super::validate::ValidationErrors;
use super::AdminError;

/// Longest accepted product name, in characters.
pub const PRODUCT_NAME_MAX: usize = 100;

/// How many times a write is attempted when a freshly generated slug or SKU
/// turns out to be taken by the time it is written.
pub const MAX_WRITE_ATTEMPTS: usize = 3;

/// Values entered on the create and edit screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Product name.
    pub name: String,
    /// Price as typed.
    pub price: String,
    /// Selected category.
    pub category_id: Option<CategoryId>,
    /// Optional description, only used on create.
    pub description: Option<String>,
}

/// A form that passed validation.
struct Checked {
    name: String,
    price: Price,
    category_id: CategoryId,
}

/// Create, edit and delete products.
pub struct ProductAdmin<'a, S: InventoryStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: InventoryStore + ?Sized> ProductAdmin<'a, S> {
    /// Creates the admin over `store`.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All products with their categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list(&self) -> Result<Vec<ProductListing>, AdminError> {
        Ok(self.store.listings()?)
    }

    /// One product with its category.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ProductNotFound`] or a store error.
    pub fn show(&self, id: ProductId) -> Result<ProductListing, AdminError> {
        let product = self.store.product(id)?.ok_or(AdminError::ProductNotFound(id))?;
        let category = self.store.category(product.category_id)?;
        Ok(ProductListing { product, category })
    }

    /// Loads product `id` into an edit form. The price is rounded to whole
    /// units, as the edit screen shows it.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ProductNotFound`] or a store error.
    pub fn select(&self, id: ProductId) -> Result<ProductForm, AdminError> {
        let product = self.store.product(id)?.ok_or(AdminError::ProductNotFound(id))?;
        Ok(ProductForm {
            name: product.name,
            price: product.price.rounded_units().to_string(),
            category_id: Some(product.category_id),
            description: product.description,
        })
    }

    /// The slug and SKU a new product called `name` would receive now.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn preview(&self, name: &str) -> Result<(Slug, Sku), AdminError> {
        let name = capitalize_name(name);
        let generator = IdentifierGenerator::new(self.store);
        Ok((generator.generate_slug(&name, None)?, generator.generate_sku(&name, None)?))
    }

    /// Validates `form`, generates identifiers and inserts the product.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Invalid`] for a bad form, or a store error. A
    /// slug or SKU claimed concurrently is regenerated up to
    /// [`MAX_WRITE_ATTEMPTS`] times before the conflict is returned.
    pub fn create(&self, form: &ProductForm) -> Result<Product, AdminError> {
        let checked = self.validate(form, None)?;
        let description = form.description.clone().filter(|d| !d.trim().is_empty());
        let generator = IdentifierGenerator::new(self.store);

        let product = retry_conflicts(MAX_WRITE_ATTEMPTS, || {
            let new = NewProduct {
                name: checked.name.clone(),
                description: description.clone(),
                price: checked.price,
                slug: generator.generate_slug(&checked.name, None)?,
                sku: generator.generate_sku(&checked.name, None)?,
                category_id: checked.category_id,
            };
            self.store.insert_product(new)
        })?;
        info!(id = %product.id, slug = %product.slug, sku = %product.sku, "product created");
        Ok(product)
    }

    /// Validates `form` and rewrites product `id`.
    ///
    /// Slug and SKU are regenerated, ignoring the product's own values, only
    /// when the name changed; otherwise they are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ProductNotFound`], [`AdminError::Invalid`] or a
    /// store error.
    pub fn update(&self, id: ProductId, form: &ProductForm) -> Result<Product, AdminError> {
        let current = self.store.product(id)?.ok_or(AdminError::ProductNotFound(id))?;
        let checked = self.validate(form, Some(id))?;
        let renamed = current.name != checked.name;
        let generator = IdentifierGenerator::new(self.store);

        let attempts = if renamed { MAX_WRITE_ATTEMPTS } else { 1 };
        let product = retry_conflicts(attempts, || {
            let (slug, sku) = if renamed {
                (
                    generator.generate_slug(&checked.name, Some(id))?,
                    generator.generate_sku(&checked.name, Some(id))?,
                )
            } else {
                (current.slug.clone(), current.sku.clone())
            };
            let changes = ProductChanges {
                name: checked.name.clone(),
                price: checked.price,
                sku,
                slug,
                category_id: checked.category_id,
            };
            self.store.update_product(id, changes)
        })?;
        info!(id = %product.id, slug = %product.slug, sku = %product.sku, "product updated");
        Ok(product)
    }

    /// Deletes product `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ProductNotFound`] or a store error.
    pub fn delete(&self, id: ProductId) -> Result<Product, AdminError> {
        let product = self.store.delete_product(id).map_err(|err| match err {
            StoreError::ProductNotFound(id) => AdminError::ProductNotFound(id),
            other => AdminError::Store(other),
        })?;
        info!(id = %product.id, name = %product.name, "product deleted");
        Ok(product)
    }

    fn validate(
        &self,
        form: &ProductForm,
        exclude: Option<ProductId>,
    ) -> Result<Checked, AdminError> {
        let mut errors = ValidationErrors::default();

        let name = capitalize_name(&form.name);
        if name.is_empty() {
            errors.add("name", "The name is required.");
        } else if name.chars().count() > PRODUCT_NAME_MAX {
            errors.add("name", format!("At most {PRODUCT_NAME_MAX} characters are allowed."));
        } else if self.store.product_name_taken(&name, exclude)? {
            errors.add("name", "A product with this name already exists.");
        }

        let price = match Price::parse(&form.price) {
            Ok(price) => Some(price),
            Err(err) => {
                errors.add("price", price_message(&err));
                None
            }
        };

        let category_id = match form.category_id {
            None => {
                errors.add("category_id", "The category is required.");
                None
            }
            Some(id) if self.store.category(id)?.is_none() => {
                errors.add("category_id", "The selected category is not valid.");
                None
            }
            Some(id) => Some(id),
        };

        match (price, category_id) {
            (Some(price), Some(category_id)) if errors.is_empty() => {
                Ok(Checked { name, price, category_id })
            }
            _ => Err(AdminError::Invalid(errors)),
        }
    }
}

fn price_message(err: &PriceError) -> &'static str {
    match err {
        PriceError::Empty => "The price is required.",
        PriceError::NotNumeric => "The price must be a number.",
        PriceError::Negative => "The price must be at least 0.",
        PriceError::TooPrecise => "The price allows at most two decimals.",
        PriceError::TooLarge => "The price must not exceed 99999999.99.",
    }
}

/// Runs `write` until it succeeds, fails with something other than a unique
/// violation, or `attempts` runs out.
fn retry_conflicts<T>(
    attempts: usize,
    mut write: impl FnMut() -> Result<T, StoreError>,
) -> Result<T, AdminError> {
    let mut attempt = 1;
    loop {
        match write() {
            Err(err) if err.is_conflict() && attempt < attempts => {
                warn!(attempt, error = %err, "identifier claimed concurrently, regenerating");
                attempt += 1;
            }
            result => return result.map_err(AdminError::from),
        }
    }
}
