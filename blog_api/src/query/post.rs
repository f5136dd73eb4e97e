use std::str::FromStr;

use super::common::{Query, QueryCommon};

/// Filters, pagination and ordering for `GET posts`.
#[derive(Default, Clone, Debug)]
pub struct PostQuery {
    pub common: QueryCommon,
    /// Full-text search over title and content.
    pub search: Option<String>,
    /// Exact tag match.
    pub tag: Option<String>,
    /// `None` lists both published and draft posts.
    pub published: Option<bool>,
    pub sort_by: PostSortBy,
}

impl Query for PostQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("q".to_string(), search.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag".to_string(), tag.clone()));
        }
        if let Some(published) = self.published {
            pairs.push(("published".to_string(), published.to_string()));
        }
        pairs.extend(self.common.to_query_pairs());
        pairs.push((
            "sort".to_string(),
            format!("{}{}", self.common.sort_direction.prefix(), self.sort_by),
        ));
        pairs
    }
}

impl PostQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_sort_by(mut self, sort_by: PostSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// Sortable post fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostSortBy {
    #[default]
    PublishedAt,
}

impl std::fmt::Display for PostSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PostSortBy::PublishedAt => "publishedAt",
            }
        )
    }
}

impl FromStr for PostSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publishedAt" | "published-at" => Ok(PostSortBy::PublishedAt),
            _ => Err(()),
        }
    }
}
