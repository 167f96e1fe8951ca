use super::constants::DEFAULT_REFRESH_INTERVAL_SECS;

pub(super) fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

pub(super) fn env_non_empty(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

pub(super) fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "enabled" | "on"
    )
}

/// Zero would turn the polling loop into a busy loop.
pub(super) fn refresh_secs_or_default(secs: u64) -> u64 {
    if secs == 0 {
        DEFAULT_REFRESH_INTERVAL_SECS
    } else {
        secs
    }
}
