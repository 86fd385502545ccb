//! `stockroom product` commands.

use std::fmt::Write;

use crate::admin::{ProductAdmin, ProductForm};
use crate::cli::{ProductCommand, ProductUpdateFields};
use crate::model::{CategoryId, ProductId, ProductListing};
use crate::ports::inventory::InventoryStore;

use super::table;

/// Execute a `product` subcommand.
///
/// # Errors
///
/// Returns an error string with the validation messages or store failure.
pub fn run<S: InventoryStore + ?Sized>(
    store: &S,
    command: &ProductCommand,
) -> Result<String, String> {
    let admin = ProductAdmin::new(store);
    match command {
        ProductCommand::List { json } => {
            let listings = admin.list().map_err(|e| e.to_string())?;
            if *json {
                return to_json(&listings);
            }
            Ok(render_list(&listings))
        }
        ProductCommand::Show { id, json } => {
            let listing = admin.show(ProductId(*id)).map_err(|e| e.to_string())?;
            if *json {
                return to_json(&listing);
            }
            Ok(render_detail(&listing))
        }
        ProductCommand::Create(fields) => {
            let form = ProductForm {
                name: fields.name.clone().unwrap_or_default(),
                price: fields.price.clone().unwrap_or_default(),
                category_id: fields.category.map(CategoryId),
                description: fields.description.clone(),
            };
            let product = admin.create(&form).map_err(|e| e.to_string())?;
            Ok(format!(
                "Created product {}: {} (slug {}, SKU {})\n",
                product.id, product.name, product.slug, product.sku
            ))
        }
        ProductCommand::Update { id, fields } => {
            let id = ProductId(*id);
            let current = admin.show(id).map_err(|e| e.to_string())?.product;
            let form = apply(
                ProductForm {
                    name: current.name,
                    price: current.price.to_string(),
                    category_id: Some(current.category_id),
                    description: current.description,
                },
                fields,
            );
            let product = admin.update(id, &form).map_err(|e| e.to_string())?;
            Ok(format!(
                "Updated product {}: {} (slug {}, SKU {})\n",
                product.id, product.name, product.slug, product.sku
            ))
        }
        ProductCommand::Delete { id } => {
            let product = admin.delete(ProductId(*id)).map_err(|e| e.to_string())?;
            Ok(format!("Deleted product {}: {}\n", product.id, product.name))
        }
    }
}

/// Overlays the fields given on the command line onto the stored values.
fn apply(mut form: ProductForm, fields: &ProductUpdateFields) -> ProductForm {
    if let Some(name) = &fields.name {
        form.name.clone_from(name);
    }
    if let Some(price) = &fields.price {
        form.price.clone_from(price);
    }
    if let Some(category) = fields.category {
        form.category_id = Some(CategoryId(category));
    }
    form
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|s| s + "\n")
        .map_err(|e| format!("Failed to encode products: {e}"))
}

fn render_list(listings: &[ProductListing]) -> String {
    if listings.is_empty() {
        return "No products found.\n".to_string();
    }
    let rows: Vec<Vec<String>> = listings
        .iter()
        .map(|l| {
            vec![
                l.product.id.to_string(),
                l.product.name.clone(),
                l.product.sku.to_string(),
                format!("${}", l.product.price.formatted()),
                l.category_label().to_string(),
            ]
        })
        .collect();
    format!(
        "{}\n{} product(s) total.\n",
        table::render(&["ID", "NAME", "SKU", "PRICE", "CATEGORY"], &rows),
        rows.len()
    )
}

fn render_detail(listing: &ProductListing) -> String {
    let p = &listing.product;
    let mut out = String::new();
    let _ = writeln!(out, "ID:          {}", p.id);
    let _ = writeln!(out, "Name:        {}", p.name);
    let _ = writeln!(out, "Slug:        {}", p.slug);
    let _ = writeln!(out, "SKU:         {}", p.sku);
    let _ = writeln!(out, "Price:       ${} ({})", p.price.formatted(), p.price);
    let _ = writeln!(out, "Category:    {}", listing.category_label());
    if let Some(description) = &p.description {
        let _ = writeln!(out, "Description: {description}");
    }
    let _ = writeln!(out, "Active:      {}", if p.is_active { "yes" } else { "no" });
    let _ = writeln!(out, "Stock:       {}", p.stock);
    let _ = writeln!(out, "Created:     {}", p.created_at.to_rfc3339());
    let _ = writeln!(out, "Updated:     {}", p.updated_at.to_rfc3339());
    out
}
