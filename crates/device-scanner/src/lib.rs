//! Device-scanner crate: the public inventory facade.
//!
//! [`DeviceScanner`] picks the strategy for the host platform once and runs
//! it on demand. Every call spawns the platform tools afresh; failures of a
//! category are logged and reported as an empty list.

pub mod config;
mod scanner;
mod snapshot;

pub use config::{ScannerConfig, ToolConfig};
pub use inventory_core::{DeviceRecord, NetworkAdapterRecord, Platform};
pub use scanner::{DeviceScanner, ScanScope};
pub use snapshot::InventorySnapshot;
