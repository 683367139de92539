/// Values accepted as "on" for the `realtime` recommendation flag.
pub const REALTIME_FLAGS: &[&str] = &["yes", "true", "1", "enabled"];

/// Normalize a caller-supplied lookup key (trim + lowercase).
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Exact-match flag parsing against an allow-set; anything else is off.
pub fn flag_enabled(value: &str, allowed: &[&str]) -> bool {
    let value = normalize_key(value);
    allowed.iter().any(|candidate| *candidate == value)
}
