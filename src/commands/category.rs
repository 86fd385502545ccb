//! `stockroom category` commands.

use crate::admin::CategoryAdmin;
use crate::cli::CategoryCommand;
use crate::model::CategoryId;
use crate::ports::inventory::InventoryStore;

use super::table;

/// Execute a `category` subcommand.
///
/// # Errors
///
/// Returns an error string with the validation messages or store failure.
pub fn run<S: InventoryStore + ?Sized>(
    store: &S,
    command: &CategoryCommand,
) -> Result<String, String> {
    let admin = CategoryAdmin::new(store);
    match command {
        CategoryCommand::List { json } => {
            let categories = admin.list().map_err(|e| e.to_string())?;
            if *json {
                return serde_json::to_string_pretty(&categories)
                    .map(|s| s + "\n")
                    .map_err(|e| format!("Failed to encode categories: {e}"));
            }
            if categories.is_empty() {
                return Ok("No categories found.\n".to_string());
            }
            let rows: Vec<Vec<String>> =
                categories.iter().map(|c| vec![c.id.to_string(), c.name.clone()]).collect();
            Ok(format!(
                "{}\n{} category(ies) total.\n",
                table::render(&["ID", "NAME"], &rows),
                rows.len()
            ))
        }
        CategoryCommand::Create { name } => {
            let category = admin.create(name).map_err(|e| e.to_string())?;
            Ok(format!("Created category {}: {}\n", category.id, category.name))
        }
        CategoryCommand::Rename { id, name } => {
            let category = admin.rename(CategoryId(*id), name).map_err(|e| e.to_string())?;
            Ok(format!("Renamed category {} to {}\n", category.id, category.name))
        }
        CategoryCommand::Delete { id } => {
            let category = admin.delete(CategoryId(*id)).map_err(|e| e.to_string())?;
            Ok(format!("Deleted category {}: {}\n", category.id, category.name))
        }
    }
}
