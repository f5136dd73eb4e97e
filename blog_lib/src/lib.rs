//! Library layer for the blog tools: input validation, the seed dataset,
//! and shared UI state, on top of the `blog_api` client.

pub mod error;
pub mod seed;
pub mod ui_state;
pub mod validation;

pub use blog_api;
pub use blog_api::types;
pub use blog_api::{
    ApiConfig, Client, PostQuery, PostSortBy, Query, RequestFailure, RequestOptions,
    SortDirection, TagMetricsQuery,
};

pub use error::BlogError;
pub use seed::{seed_posts, IndexKey, IndexSpec, SeedPost, INDEXES};
pub use ui_state::{PostUi, UiFlag, UiState};
