//! Fetch limits and their defaults

use std::time::Duration;

/// Time allowed for connecting and transferring the full body.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Bytes kept from a response body; anything past this is dropped.
pub const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Settings for one [`Fetcher`](crate::fetch::Fetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Covers connection, headers and body transfer
    pub timeout: Duration,

    /// Body read cap in bytes
    pub max_body_size: usize,

    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_body_size: MAX_BODY_SIZE,
            user_agent: format!(
                "Mozilla/5.0 (compatible; pagelens/{})",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl FetchConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }
}
