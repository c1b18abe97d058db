//! Utility functions and helpers

use crate::error::{Result, WebbyError};
use percent_encoding::percent_decode_str;
use std::path::PathBuf;
use std::time::Duration;
use url::{ParseError, Url};

/// Resolves relative references handed to [`UrlUtils::last_segment`].
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// URL validation and parsing utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Validate and normalize URL
    pub fn validate_url(input: &str) -> Result<Url> {
        // Add http:// if no scheme is provided
        let url_str = if input.contains("://") {
            input.to_string()
        } else {
            format!("http://{}", input)
        };

        Url::parse(&url_str)
            .map_err(|e| WebbyError::InvalidUrl(format!("Invalid URL '{}': {}", input, e)))
    }

    /// Return the last `/`-separated segment of the URL path, without the query.
    ///
    /// `https://some.domain/path1/path2/file.zip?a=b` gives `file.zip`. A URL
    /// with no path, or one ending in `/`, gives an empty string. Relative
    /// references such as `/path1/file.zip` are accepted, and the segment is
    /// percent-decoded.
    pub fn last_segment(uri: &str) -> Result<String> {
        let invalid = |e: &dyn std::fmt::Display| {
            WebbyError::InvalidUrl(format!("Invalid URL '{}': {}", uri, e))
        };

        let url = match Url::parse(uri) {
            Ok(url) => url,
            Err(ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse(RELATIVE_BASE).map_err(|e| invalid(&e))?;
                base.join(uri).map_err(|e| invalid(&e))?
            }
            Err(e) => return Err(invalid(&e)),
        };

        let path = url.path();
        if path.is_empty() {
            return Ok(String::new());
        }

        let segment = path.rsplit('/').next().unwrap_or_default();
        percent_decode_str(segment)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
            .map_err(|e| invalid(&e))
    }
}

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand tilde (~) in file paths
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        let rest = match path.strip_prefix('~') {
            Some(rest) => rest.trim_start_matches('/'),
            None => return Ok(PathBuf::from(path)),
        };

        match dirs::home_dir() {
            Some(home_dir) => Ok(home_dir.join(rest)),
            None => Err(WebbyError::Config(
                "Cannot determine home directory".to_string(),
            )),
        }
    }
}

/// String utilities
pub struct StringUtils;

impl StringUtils {
    /// Parse a `key=value` query parameter
    pub fn parse_param(input: &str) -> Result<(String, String)> {
        match input.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(WebbyError::Config(format!(
                "Invalid parameter format: '{}'. Expected 'key=value'",
                input
            ))),
        }
    }

    /// Parse timeout values (supports suffixes like 's', 'm', 'h')
    pub fn parse_timeout(input: &str) -> Result<Duration> {
        if let Ok(seconds) = input.parse::<u64>() {
            return Ok(Duration::from_secs(seconds));
        }

        let (number_part, suffix) = if let Some(stripped) = input.strip_suffix('s') {
            (stripped, 1)
        } else if let Some(stripped) = input.strip_suffix('m') {
            (stripped, 60)
        } else if let Some(stripped) = input.strip_suffix('h') {
            (stripped, 3600)
        } else {
            return Err(WebbyError::Config(format!(
                "Invalid timeout format: '{}'. Use number with optional suffix (s/m/h)",
                input
            )));
        };

        let number: u64 = number_part
            .parse()
            .map_err(|_| WebbyError::Config(format!("Invalid timeout number: '{}'", number_part)))?;

        let seconds = number.checked_mul(suffix).ok_or_else(|| {
            WebbyError::Config(format!("Timeout out of range: '{}'", input))
        })?;

        Ok(Duration::from_secs(seconds))
    }
}
