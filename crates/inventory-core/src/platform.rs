use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

static HOST_PLATFORM: OnceLock<Platform> = OnceLock::new();

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    /// Platform of the running process. Resolved on first call and cached.
    pub fn detect() -> Self {
        *HOST_PLATFORM.get_or_init(|| Self::from_os_name(std::env::consts::OS))
    }

    /// Map an OS name as spelled by `std::env::consts::OS`.
    pub fn from_os_name(os: &str) -> Self {
        match os.trim().to_ascii_lowercase().as_str() {
            "windows" => Self::Windows,
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_os_names() {
        assert_eq!(Platform::from_os_name("windows"), Platform::Windows);
        assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("Darwin"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("linux"), Platform::Linux);
        assert_eq!(Platform::from_os_name("freebsd"), Platform::Other);
    }

    #[test]
    fn detect_is_stable_across_calls() {
        let first = Platform::detect();
        assert_eq!(first, Platform::detect());
        assert_eq!(first, Platform::from_os_name(std::env::consts::OS));
    }
}
