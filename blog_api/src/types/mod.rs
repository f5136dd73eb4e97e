mod meta;
pub use self::meta::PostPage;

mod post;
pub use self::post::{Inserted, Post, PostID, PostInput};

mod metrics;
pub use self::metrics::TagMetric;
