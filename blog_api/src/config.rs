//! Client configuration: the API base path and the origin used to absolutize it.

/// Base path used when `BLOG_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "/api";

/// Origin used to absolutize a relative base path when `BLOG_API_ORIGIN` is not set.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Environment variable holding the API base path.
pub const API_BASE_VAR: &str = "BLOG_API_BASE";

/// Environment variable holding the origin.
pub const ORIGIN_VAR: &str = "BLOG_API_ORIGIN";

/// Read-only settings handed to [`crate::Client`] at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix under which every backend endpoint lives, e.g. `/api` or
    /// `http://backend:4000/api`.
    pub api_base: String,
    /// Scheme and host joined in front of a relative base path. `None` means
    /// relative URLs cannot be resolved and requests fail.
    pub origin: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            origin: Some(DEFAULT_ORIGIN.to_string()),
        }
    }
}

impl ApiConfig {
    /// Creates a config with the given base path and the default origin.
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.to_string(),
            ..Self::default()
        }
    }

    /// Replaces the origin.
    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = Some(origin.to_string());
        self
    }

    /// Drops the origin, so only absolute base paths resolve.
    pub fn without_origin(mut self) -> Self {
        self.origin = None;
        self
    }

    /// Reads `BLOG_API_BASE` and `BLOG_API_ORIGIN` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api_base: non_empty(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            origin: Some(non_empty(ORIGIN_VAR).unwrap_or_else(|| DEFAULT_ORIGIN.to_string())),
        }
    }
}
