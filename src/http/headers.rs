//! Default request headers

use reqwest::blocking::RequestBuilder;
use reqwest::header::{HeaderName, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, USER_AGENT};
use std::fmt;

pub const USER_AGENT_VALUE: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Ubuntu Chromium/58.0.3029.110 Chrome/58.0.3029.110 Safari/537.36";
pub const LANGUAGE_VALUE: &str = "en-US,en;q=0.8";
pub const CACHE_CONTROL_VALUE: &str = "max-age=0";

/// Headers sent with every request, in the order they are applied.
pub const DEFAULT_HEADERS: [(HeaderName, &str); 3] = [
    (USER_AGENT, USER_AGENT_VALUE),
    (ACCEPT_LANGUAGE, LANGUAGE_VALUE),
    (CACHE_CONTROL, CACHE_CONTROL_VALUE),
];

/// Media types a decoder can ask for through the `Accept` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Csv,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attach the default header set, plus `Accept` when a content type is given.
///
/// Without a content type reqwest still sends its own `Accept: */*`.
pub fn apply_default_headers(
    mut request: RequestBuilder,
    accept: Option<ContentType>,
) -> RequestBuilder {
    for (name, value) in DEFAULT_HEADERS.iter() {
        request = request.header(name.clone(), *value);
    }
    if let Some(content_type) = accept {
        request = request.header(ACCEPT, content_type.as_str());
    }
    request
}

#[cfg(test)]
mod tests {
    use super::{apply_default_headers, ContentType, CACHE_CONTROL_VALUE, LANGUAGE_VALUE};
    use reqwest::blocking::{Client, Request};
    use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, USER_AGENT};

    fn build(accept: Option<ContentType>) -> Request {
        let client = Client::new();
        apply_default_headers(client.get("http://example.com/data"), accept)
            .build()
            .expect("request should build")
    }

    #[test]
    fn default_headers_are_always_present() {
        let request = build(None);
        let headers = request.headers();
        assert!(headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .expect("user agent")
            .starts_with("Mozilla/5.0"));
        assert_eq!(headers.get(ACCEPT_LANGUAGE).unwrap(), LANGUAGE_VALUE);
        assert_eq!(headers.get(CACHE_CONTROL).unwrap(), CACHE_CONTROL_VALUE);
        assert!(headers.get(ACCEPT).is_none());
    }

    #[test]
    fn accept_header_follows_content_type() {
        let request = build(Some(ContentType::Json));
        assert_eq!(request.headers().get(ACCEPT).unwrap(), "application/json");

        let request = build(Some(ContentType::Csv));
        assert_eq!(request.headers().get(ACCEPT).unwrap(), "text/csv");
    }

    #[test]
    fn content_type_displays_media_type() {
        assert_eq!(ContentType::Csv.to_string(), "text/csv");
    }
}
