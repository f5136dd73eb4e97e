use anyhow::Result;
use blog_lib::validation;
use blog_lib::{Client, PostQuery, Query, SortDirection};
use clap::Args;

use crate::output::{print_post, print_posts, OutputFormat};

#[derive(Args)]
pub struct PostsArgs {
    /// Get a single post by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Full-text search over title and content
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Filter by status: true (published) or false (draft)
    #[arg(long)]
    pub published: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page (max 100)
    #[arg(long, default_value = "10")]
    pub limit: i64,

    /// Sort by publication date ascending instead of descending
    #[arg(long)]
    pub asc: bool,
}

pub async fn run(args: &PostsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(ref id) = args.id {
        let id = validation::validate_post_id(id)?;
        let post = client.get_post(&id).await?;
        return print_post(&post, format);
    }

    let mut query = PostQuery::default()
        .with_page(validation::validate_page(args.page)?)
        .with_limit(validation::validate_limit(args.limit)?);

    if let Some(ref search) = args.search {
        let sanitized = validation::validate_search(search)?;
        query = query.with_search(&sanitized);
    }

    if let Some(ref tag) = args.tag {
        let tags = validation::validate_tags(std::slice::from_ref(tag))?;
        if let Some(tag) = tags.first() {
            query = query.with_tag(tag);
        }
    }

    if let Some(ref published) = args.published {
        query = query.with_published(validation::validate_published(published)?);
    }

    if args.asc {
        query = query.with_sort_direction(SortDirection::Asc);
    }

    let page = client.list_posts(&query).await?;

    eprintln!(
        "Page {}/{} ({} total posts)",
        page.page, page.total_pages, page.total
    );

    print_posts(&page.items, format)
}
