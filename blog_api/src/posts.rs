//! Typed post endpoints layered on the verb facade.

use crate::{
    options::RequestOptions,
    query::{Query, TagMetricsQuery},
    types::{Inserted, Post, PostInput, PostPage, TagMetric},
    Client, PostQuery, RequestFailure,
};

impl Client {
    /// Fetches a page of posts matching the given query.
    pub async fn list_posts(&self, query: &PostQuery) -> Result<PostPage, RequestFailure> {
        self.get(
            "/posts",
            RequestOptions::new().with_query_pairs(query.to_query_pairs()),
        )
        .await
    }

    /// Fetches a single post by id.
    pub async fn get_post(&self, id: &str) -> Result<Post, RequestFailure> {
        self.get(&format!("/posts/{}", id), RequestOptions::default())
            .await
    }

    /// Creates a post and returns the id the backend assigned.
    pub async fn create_post(&self, input: &PostInput) -> Result<Inserted, RequestFailure> {
        self.post("/posts", input, RequestOptions::default()).await
    }

    /// Replaces a post's editable fields and returns the stored document.
    pub async fn update_post(&self, id: &str, input: &PostInput) -> Result<Post, RequestFailure> {
        self.put(&format!("/posts/{}", id), input, RequestOptions::default())
            .await
    }

    /// Deletes a post. The backend answers `204 No Content`.
    pub async fn delete_post(&self, id: &str) -> Result<(), RequestFailure> {
        self.delete(&format!("/posts/{}", id), RequestOptions::default())
            .await
    }

    /// Fetches the most used tags, most frequent first.
    pub async fn tag_metrics(
        &self,
        query: &TagMetricsQuery,
    ) -> Result<Vec<TagMetric>, RequestFailure> {
        self.get(
            "/posts/metrics/by-tag",
            RequestOptions::new().with_query_pairs(query.to_query_pairs()),
        )
        .await
    }
}
