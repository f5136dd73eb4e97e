//! Client for the blog backend HTTP API.
//!
//! [`Client`] exposes `get`/`post`/`put`/`delete` against a configured base
//! path and turns every failure into a [`RequestFailure`] carrying a code, a
//! message and optional details. Typed post endpoints are built on top.

mod client;
pub mod config;
mod errors;
mod options;
mod posts;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::ApiConfig;
pub use self::errors::{normalize, ErrorBody, RequestFailure, TransportError, DEFAULT_MESSAGE};
pub use self::options::{Request, RequestOptions};
pub use self::query::{PostQuery, PostSortBy, Query, QueryCommon, SortDirection, TagMetricsQuery};
pub use reqwest::Method;
