use anyhow::Result;
use blog_lib::validation;
use blog_lib::{Client, TagMetricsQuery};
use clap::Args;

use crate::output::{print_tags, OutputFormat};

#[derive(Args)]
pub struct TagsArgs {
    /// Number of tags to show (backend default 10, max 100)
    #[arg(long)]
    pub limit: Option<i64>,

    /// Count only published (true) or draft (false) posts
    #[arg(long)]
    pub published: Option<String>,
}

pub async fn run(args: &TagsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = TagMetricsQuery::default();

    if let Some(limit) = args.limit {
        query = query.with_limit(validation::validate_limit(limit)?);
    }

    if let Some(ref published) = args.published {
        query = query.with_only_published(validation::validate_published(published)?);
    }

    let metrics = client.tag_metrics(&query).await?;
    print_tags(&metrics, format)
}
