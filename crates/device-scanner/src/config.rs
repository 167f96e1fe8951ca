mod constants;
mod defaults;
mod env;
mod file;
mod load;
mod types;
mod util;

pub use constants::{CONFIG_PATH_ENV, DEFAULT_REFRESH_INTERVAL_SECS};
pub use types::{ScannerConfig, ToolConfig};
