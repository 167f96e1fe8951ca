//! Inventory-core crate: shared building blocks for the device scanner.
//!
//! Holds the normalized record types every platform strategy produces, the
//! error taxonomy, the external command runner, platform detection, and the
//! [`InventorySource`] trait the per-platform crates implement.

mod command;
mod error;
pub mod normalize;
mod platform;
mod record;
mod source;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use command::{CommandOutput, CommandRunner, ExitMode, SystemCommandRunner};
pub use error::{ScanError, ScanResult};
pub use platform::Platform;
pub use record::{DeviceRecord, NetworkAdapterRecord, UNKNOWN_DEVICE};
pub use source::{InventorySource, UnsupportedSource};
