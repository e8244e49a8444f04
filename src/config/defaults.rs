pub(super) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub(super) const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024 * 1024;

pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(super) fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}

/// Strip whitespace and trailing slashes so endpoint paths join cleanly.
pub(super) fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
