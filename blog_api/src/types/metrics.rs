use serde::{Deserialize, Serialize};

/// Number of posts carrying a tag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TagMetric {
    pub tag: String,
    pub count: i64,
}
