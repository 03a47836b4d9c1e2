/// Default API location for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the kanban API, without a trailing slash.
    pub api_url: String,
}

impl ClientConfig {
    /// Read `KANBAN_API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        Self::new(std::env::var("KANBAN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()))
    }

    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
