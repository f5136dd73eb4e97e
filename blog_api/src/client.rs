//! HTTP client for the blog backend API.

use reqwest::{header, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use crate::{
    config::ApiConfig,
    errors::{normalize, RequestFailure, TransportError},
    options::{Request, RequestOptions},
};

const USER_AGENT: &str = concat!("blog_api/", env!("CARGO_PKG_VERSION"));

/// Verb-level facade over the blog backend.
///
/// Holds only its [`ApiConfig`]. Each call builds a fresh `reqwest::Client`
/// and sends exactly one request, so clones can be used from any number of
/// tasks at once. Every failure is normalized into a [`RequestFailure`].
#[derive(Clone, Debug, Default)]
pub struct Client {
    config: ApiConfig,
}

impl Client {
    /// Creates a client from an explicit configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Creates a client whose base path is `base_url`. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(ApiConfig::new(base_url))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Prefixes `path` with the base path, inserting a `/` when `path` lacks one.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.config.api_base, path)
        } else {
            format!("{}/{}", self.config.api_base, path)
        }
    }

    /// Sends a GET request and parses the JSON response.
    pub async fn get<T>(&self, path: &str, options: RequestOptions) -> Result<T, RequestFailure>
    where
        T: DeserializeOwned,
    {
        let request = Request::new(Method::GET, self.resolve(path)).merge(options);
        self.execute(request).await
    }

    /// Sends a POST request with `body` as JSON and parses the JSON response.
    pub async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, RequestFailure>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let request = Request::new(Method::POST, self.resolve(path))
            .with_body(body)
            .merge(options);
        self.execute(request).await
    }

    /// Sends a PUT request with `body` as JSON and parses the JSON response.
    pub async fn put<B, T>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, RequestFailure>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let request = Request::new(Method::PUT, self.resolve(path))
            .with_body(body)
            .merge(options);
        self.execute(request).await
    }

    /// Sends a DELETE request. An empty response body parses as `null`, so
    /// `()` is a valid target for `204 No Content`.
    pub async fn delete<T>(&self, path: &str, options: RequestOptions) -> Result<T, RequestFailure>
    where
        T: DeserializeOwned,
    {
        let request = Request::new(Method::DELETE, self.resolve(path)).merge(options);
        self.execute(request).await
    }

    /// Sends a prepared request and parses its JSON response.
    pub async fn execute<T>(&self, request: Request) -> Result<T, RequestFailure>
    where
        T: DeserializeOwned,
    {
        self.send(request).await.map_err(normalize)
    }

    async fn send<T>(&self, request: Request) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        let url = self.absolute_url(&request.url)?;
        tracing::debug!("{} {}", request.method, url);

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            TransportError::Network(e)
        })?;

        let mut req = client.request(request.method.clone(), url);
        if !request.has_header(header::ACCEPT.as_str()) {
            req = req.header(header::ACCEPT, "application/json");
        }
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(body) = &request.body {
            if !request.has_header(header::CONTENT_TYPE.as_str()) {
                req = req.header(header::CONTENT_TYPE, "application/json");
            }
            req = req.body(body.to_string());
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to send {} request: {}", request.method, e);
            TransportError::Network(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            TransportError::Network(e)
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                data: error_data(&body),
            });
        }

        parse_body(&body).map_err(|e| {
            tracing::warn!(
                "Failed to parse response body: {} | body: {}",
                e,
                truncate_body(&body)
            );
            TransportError::Decode { source: e, body }
        })
    }

    fn absolute_url(&self, resolved: &str) -> Result<Url, TransportError> {
        match (Url::parse(resolved), self.config.origin.as_deref()) {
            (Ok(url), _) => Ok(url),
            (Err(url::ParseError::RelativeUrlWithoutBase), Some(origin)) => Url::parse(origin)
                .and_then(|base| base.join(resolved))
                .map_err(|source| invalid_url(resolved, source)),
            (Err(source), _) => Err(invalid_url(resolved, source)),
        }
    }
}

fn invalid_url(url: &str, source: url::ParseError) -> TransportError {
    tracing::error!("Invalid URL constructed: {} ({})", url, source);
    TransportError::InvalidUrl {
        url: url.to_string(),
        source,
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, RequestFailure> {
    serde_json::to_value(body)
        .map_err(TransportError::Encode)
        .map_err(normalize)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    if body.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(body)
    }
}

fn error_data(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
