//! Query-string URL builder

/// Accumulates a base, a path and query parameters into a URL string.
///
/// Parameters keep the order in which they were first added. Keys and values are
/// written verbatim, so callers must percent-encode them beforehand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
    path: String,
    params: Vec<(String, String)>,
}

impl UrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set a query parameter. Empty values are ignored; a repeated key replaces the old value.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            return self;
        }

        let key = key.into();
        match self.params.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn build(&self) -> String {
        let mut url = String::with_capacity(self.base.len() + self.path.len());
        url.push_str(&self.base);
        url.push_str(&self.path);

        let mut sep = '?';
        for (key, value) in &self.params {
            url.push(sep);
            url.push_str(key);
            url.push('=');
            url.push_str(value);
            sep = '&';
        }

        url
    }
}
