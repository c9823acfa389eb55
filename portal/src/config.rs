//! Backend location configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "API_URL";

/// Base URL used when no override is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { base_url: trimmed.to_owned() }
    }

    /// Read the base URL from `API_URL`, falling back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Build from an optional override such as a build-time `option_env!`.
    #[must_use]
    pub fn from_override(value: Option<&str>) -> Self {
        match value {
            Some(raw) if !raw.trim().is_empty() => Self::new(raw),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an API path (`/eventos/3`) onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Resolve an asset reference from the backend (`/uploads/a.png`)
    /// against the backend's origin. Absolute URLs pass through; an empty
    /// reference stays empty.
    #[must_use]
    pub fn asset_url(&self, reference: &str) -> String {
        let reference = reference.trim();
        if reference.is_empty() {
            return String::new();
        }
        url::Url::parse(&self.base_url)
            .and_then(|base| base.join(reference))
            .map_or_else(|_| reference.to_owned(), String::from)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned() }
    }
}
