//! Clock port used to stamp record timestamps.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Stores take a clock instead of calling `Utc::now` so that tests can pin
/// `created_at` and `updated_at`.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
