mod common;
pub use self::common::{Query, QueryCommon, SortDirection};

mod post;
pub use self::post::{PostQuery, PostSortBy};

mod metrics;
pub use self::metrics::TagMetricsQuery;
