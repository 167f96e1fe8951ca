//! PowerShell-based inventory parsing.
//!
//! Both queries pipe through `ConvertTo-Json`, which yields an array for
//! several items and a bare object for exactly one.

pub mod network;
pub mod usb;

pub use network::parse_net_adapters_json;
pub use usb::parse_pnp_devices_json;
