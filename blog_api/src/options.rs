//! Per-call request options and their merge onto verb defaults.
//!
//! A verb call starts from a [`Request`] carrying the verb's method and, for
//! POST/PUT, its body. Caller [`RequestOptions`] are then merged on top field
//! by field: a caller value replaces the default, headers and query pairs are
//! appended.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

/// Optional settings a caller can pass to any verb.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Overrides the verb's method.
    pub method: Option<Method>,
    /// Overrides the verb's body.
    pub body: Option<Value>,
    /// Extra headers, sent in order.
    pub headers: Vec<(String, String)>,
    /// Extra query parameters appended to the URL.
    pub query: Vec<(String, String)>,
    /// Whole-request timeout. No timeout when unset.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A fully described request, ready to be sent by [`crate::Client::execute`].
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl Request {
    /// A request with the given method and URL and nothing else.
    pub fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            body: None,
            headers: Vec::new(),
            query: Vec::new(),
            timeout: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Applies caller options over this request's defaults.
    pub fn merge(mut self, options: RequestOptions) -> Self {
        if let Some(method) = options.method {
            self.method = method;
        }
        if let Some(body) = options.body {
            self.body = Some(body);
        }
        self.headers.extend(options.headers);
        self.query.extend(options.query);
        if options.timeout.is_some() {
            self.timeout = options.timeout;
        }
        self
    }

    /// Whether the caller already set a header, compared case-insensitively.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}
