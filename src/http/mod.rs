//! HTTP client module
//!
//! This module owns the blocking HTTP client and the GET helpers built on top of it.

use crate::config::ClientConfig;
use crate::error::{Result, WebbyError};
use log::debug;
use reqwest::blocking::{Client, ClientBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::io::Write;
use url::Url;

pub mod headers;
pub mod response;

pub use headers::ContentType;
pub use response::CsvRows;

/// HTTP client handle
///
/// The underlying client is created on first use and then reused, so a cookie jar
/// (when enabled) keeps every cookie the server sets for as long as the handle lives.
#[derive(Debug, Default)]
pub struct Api {
    client: Option<Client>,
    config: ClientConfig,
}

impl Api {
    /// Create a handle with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle whose client will be built from `config`
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            client: None,
            config,
        }
    }

    /// Wrap a client built elsewhere. Its settings are used as-is.
    pub fn with_client(client: Client) -> Self {
        Self {
            client: Some(client),
            config: ClientConfig::default(),
        }
    }

    /// Turn on cookie persistence.
    ///
    /// Any existing client is dropped; the next request builds a new one with an empty jar.
    pub fn enable_cookies(&mut self) {
        debug!("enabling cookie store");
        self.config.cookies = true;
        self.client = None;
    }

    /// Send a GET request with the default headers and return the response whatever its status.
    pub fn fetch(&mut self, uri: &str, accept: Option<ContentType>) -> Result<Response> {
        let url = Url::parse(uri)
            .map_err(|e| WebbyError::InvalidRequest(format!("Invalid URL '{}': {}", uri, e)))?;

        let client = self.client()?;
        let request = headers::apply_default_headers(client.get(url), accept);

        match accept {
            Some(content_type) => debug!("GET {} (accept {})", uri, content_type),
            None => debug!("GET {}", uri),
        }

        let response = request.send()?;
        debug!("GET {} -> {}", uri, response.status());
        Ok(response)
    }

    /// Decode the JSON body at `uri` into `target`.
    ///
    /// The decoded value replaces `target` wholesale; fields are not merged into the
    /// existing value. An empty body succeeds and leaves `target` as it was.
    pub fn get_json<T>(&mut self, uri: &str, target: &mut T) -> Result<()>
    where
        T: DeserializeOwned,
    {
        let resp = self.fetch_ok(uri, Some(ContentType::Json))?;
        response::decode_json(resp, target)
    }

    /// Call `accept_row` once for every CSV record at `uri`.
    pub fn get_csv<F>(&mut self, uri: &str, accept_row: F) -> Result<()>
    where
        F: FnMut(Vec<String>) -> Result<()>,
    {
        let resp = self.fetch_ok(uri, Some(ContentType::Csv))?;
        response::read_csv(resp, accept_row)
    }

    /// Copy the raw body at `uri` into `sink`, returning the byte count.
    pub fn get_body<W>(&mut self, uri: &str, sink: &mut W) -> Result<u64>
    where
        W: Write + ?Sized,
    {
        let resp = self.fetch_ok(uri, None)?;
        response::copy_body(resp, sink)
    }

    fn fetch_ok(&mut self, uri: &str, accept: Option<ContentType>) -> Result<Response> {
        let resp = self.fetch(uri, accept)?;
        if resp.status() != StatusCode::OK {
            return Err(WebbyError::UnexpectedStatus(resp.status()));
        }
        Ok(resp)
    }

    fn client(&mut self) -> Result<&Client> {
        let client = match self.client.take() {
            Some(client) => client,
            None => build_client(&self.config)?,
        };
        let client: &Client = self.client.insert(client);
        Ok(client)
    }
}

fn build_client(config: &ClientConfig) -> Result<Client> {
    debug!(
        "building HTTP client (cookies: {}, max redirects: {})",
        config.cookies, config.max_redirects
    );

    let mut builder = ClientBuilder::new()
        .cookie_store(config.cookies)
        .redirect(if config.max_redirects > 0 {
            reqwest::redirect::Policy::limited(config.max_redirects)
        } else {
            reqwest::redirect::Policy::none()
        });

    // reqwest's blocking client applies a 30s timeout unless told otherwise
    builder = builder.timeout(config.timeout);

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    builder.build().map_err(WebbyError::Http)
}
