//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `stockroom`.
#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Manage inventory categories and products")]
pub struct Cli {
    /// Directory holding `inventory.yaml` (overrides `STOCKROOM_STORE`).
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List, create, rename and delete categories.
    #[command(subcommand)]
    Category(CategoryCommand),
    /// List, show, create, update and delete products.
    #[command(subcommand)]
    Product(ProductCommand),
    /// Print the slug and SKU a new product with this name would get.
    Preview {
        /// Product name.
        name: String,
    },
}

/// `stockroom category ...`
#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// List all categories.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Create a category.
    Create {
        /// Category name.
        name: String,
    },
    /// Rename a category.
    Rename {
        /// Category id.
        id: u64,
        /// New name.
        name: String,
    },
    /// Delete a category that has no products.
    Delete {
        /// Category id.
        id: u64,
    },
}

/// `stockroom product ...`
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List all products with their category.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show one product.
    Show {
        /// Product id.
        id: u64,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Create a product; slug and SKU are generated from the name.
    Create(ProductFields),
    /// Edit a product; omitted fields keep their current value.
    Update {
        /// Product id.
        id: u64,
        /// Fields to change.
        #[command(flatten)]
        fields: ProductUpdateFields,
    },
    /// Delete a product.
    Delete {
        /// Product id.
        id: u64,
    },
}

/// Product form fields accepted on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct ProductFields {
    /// Product name.
    #[arg(long)]
    pub name: Option<String>,
    /// Price, e.g. `12500` or `19.90`.
    #[arg(long)]
    pub price: Option<String>,
    /// Category id.
    #[arg(long = "category", value_name = "ID")]
    pub category: Option<u64>,
    /// Description.
    #[arg(long)]
    pub description: Option<String>,
}

/// Fields `product update` may change. The description is set on create
/// only, so there is no flag for it here.
#[derive(Debug, Clone, Default, Args)]
pub struct ProductUpdateFields {
    /// New product name.
    #[arg(long)]
    pub name: Option<String>,
    /// New price, e.g. `12500` or `19.90`.
    #[arg(long)]
    pub price: Option<String>,
    /// New category id.
    #[arg(long = "category", value_name = "ID")]
    pub category: Option<u64>,
}
