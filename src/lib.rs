//! webby - a small blocking HTTP helper
//!
//! Issues GET requests with a fixed set of browser-like headers and decodes the
//! response as JSON, CSV records or raw bytes. Also ships a query-string URL
//! builder and a last-path-segment helper.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod http;
pub mod logging;
pub mod output;
pub mod url_builder;
pub mod utils;

pub use config::ClientConfig;
pub use error::{Result, WebbyError};
pub use http::{Api, ContentType, CsvRows};
pub use url_builder::UrlBuilder;
pub use utils::UrlUtils;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
