/// Parameters for `GET posts/metrics/by-tag`.
#[derive(Default, Clone, Copy, Debug)]
pub struct TagMetricsQuery {
    /// Number of tags to return. The backend defaults to 10 and caps at 100.
    pub limit: Option<i64>,
    /// Restrict counting to published (`true`) or draft (`false`) posts.
    pub only_published: Option<bool>,
}

impl TagMetricsQuery {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_only_published(mut self, only_published: bool) -> Self {
        self.only_published = Some(only_published);
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(only_published) = self.only_published {
            pairs.push(("onlyPublished".to_string(), only_published.to_string()));
        }
        pairs
    }
}
