//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortDirection`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by paginated list queries. Provides query-string
/// serialization and shared builder methods for pagination and sort direction.
pub trait Query {
    /// Returns the query's parameters as ordered key/value pairs.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.to_query_pairs() {
                pairs.append_pair(&key, &value);
            }
        }
        url
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page. The backend caps it at 100.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets the sort direction (ascending or descending).
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = sort_direction;
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest first).
    Asc,
    /// Descending order (newest first). This is the default.
    #[default]
    Desc,
}

impl SortDirection {
    /// Prefix the backend expects in front of the sort field.
    pub fn prefix(self) -> &'static str {
        match self {
            SortDirection::Asc => "",
            SortDirection::Desc => "-",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Fields shared by list queries: pagination and sort direction.
#[derive(Clone, Copy, Debug)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Results per page. `None` uses the backend default of 10.
    pub limit: Option<i64>,
    /// Sort direction. Defaults to descending.
    pub sort_direction: SortDirection,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            limit: None,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl QueryCommon {
    /// Returns the pagination parameters.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("page".to_string(), self.page.to_string())];
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_defaults() {
        let common = QueryCommon::default();
        assert_eq!(common.page, 1);
        assert!(common.limit.is_none());
        assert_eq!(common.sort_direction, SortDirection::Desc);
        assert_eq!(common.to_query_pairs(), vec![("page".to_string(), "1".to_string())]);
    }

    #[test]
    fn sort_direction_parsing() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Asc.prefix(), "");
        assert_eq!(SortDirection::Desc.prefix(), "-");
    }
}
