//! Client configuration for webby

use std::time::Duration;

/// Redirect limit used when nothing else is configured. Same as reqwest's own default.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Settings applied when the underlying HTTP client is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Total time allowed for a request, `None` waits forever
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// `0` turns redirect following off
    pub max_redirects: usize,
    /// Keep a cookie jar for the lifetime of the client
    pub cookies: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            timeout: None,
            connect_timeout: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            cookies: false,
        }
    }
}
