use camino::Utf8PathBuf;

use crate::logging::LogFormat;

/// File patched when neither configuration nor arguments name one.
pub const DEFAULT_TARGET_PATH: &str = "frontend/src/components/orders/OrderDetails.tsx";

/// Default log filter expression; step misses are logged at `warn`.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default target path as an owned path.
#[must_use]
pub fn default_target_path() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_TARGET_PATH)
}

/// Default log filter expression used by the binary.
#[must_use]
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
