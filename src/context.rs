//! Service context bundling the port trait objects the stores need.

use crate::adapters::live::{LiveClock, LiveFileSystem};
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the external boundaries behind trait objects.
///
/// Constructors wire up different adapter implementations; tests swap in
/// in-memory filesystems and manual clocks.
pub struct ServiceContext {
    /// Clock for record timestamps.
    pub clock: Box<dyn Clock>,
    /// Filesystem holding the inventory file.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a context backed by the system clock and the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock), fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, fs: Box<dyn FileSystem>) -> Self {
        Self { clock, fs }
    }
}
