//! Product categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::CategoryId;

/// A named group of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier.
    pub id: CategoryId,
    /// Display name, always in [`capitalize_name`] form.
    pub name: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last renamed.
    pub updated_at: DateTime<Utc>,
}

/// Canonical form for entered names: trimmed, lowercased, first letter
/// uppercased (`"  mESA de PINO "` becomes `"Mesa de pino"`).
#[must_use]
pub fn capitalize_name(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
