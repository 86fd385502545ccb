//! `stockroom preview` command.

use crate::admin::ProductAdmin;
use crate::ports::inventory::InventoryStore;

/// Execute the `preview` command.
///
/// Shows the identifiers a product called `name` would be created with
/// right now. Nothing is reserved.
///
/// # Errors
///
/// Returns an error string if the store cannot be read.
pub fn run<S: InventoryStore + ?Sized>(store: &S, name: &str) -> Result<String, String> {
    let (slug, sku) = ProductAdmin::new(store).preview(name).map_err(|e| e.to_string())?;
    Ok(format!("slug: {slug}\nsku:  {sku}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn prints_slug_and_sku() {
        let store = MemoryStore::new();
        let output = run(&store, "Café Deluxe!!").unwrap();
        assert_eq!(output, "slug: cafe-deluxe\nsku:  CAFEDELU\n");
    }
}
