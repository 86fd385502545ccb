//! Inventory records: categories, products and the values they carry.

pub mod category;
pub mod codes;
pub mod ids;
pub mod price;
pub mod product;

pub use category::{capitalize_name, Category};
pub use codes::{Sku, Slug};
pub use ids::{CategoryId, ProductId};
pub use price::{Price, PriceError};
pub use product::{NewProduct, Product, ProductChanges, ProductListing};
