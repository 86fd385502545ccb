//! Port traits defining external boundaries.
//!
//! Each trait separates the admin core from something it does not own:
//! stored records, the filesystem, and time. Implementations live in
//! `src/adapters/` and `src/store/`.

pub mod clock;
pub mod filesystem;
pub mod inventory;
pub mod records;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use inventory::InventoryStore;
pub use records::{RecordStore, UniqueField};
