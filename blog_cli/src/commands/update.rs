use anyhow::Result;
use blog_lib::validation;
use blog_lib::Client;
use clap::Args;

use crate::output::{print_post, OutputFormat};

#[derive(Args)]
pub struct UpdateArgs {
    /// ID of the post to replace
    #[arg(long)]
    pub id: String,

    /// Post title (5-140 characters)
    #[arg(long)]
    pub title: String,

    /// Author name
    #[arg(long)]
    pub author: String,

    /// Post body
    #[arg(long)]
    pub content: String,

    /// Tag to attach (repeatable). Omitting every tag clears them.
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Mark the post as published. Omitting it turns the post into a draft.
    #[arg(long)]
    pub published: bool,
}

pub async fn run(args: &UpdateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let id = validation::validate_post_id(&args.id)?;
    let input = validation::new_post(
        &args.title,
        &args.author,
        &args.content,
        &args.tags,
        args.published,
    )?;

    let post = client.update_post(&id, &input).await?;
    tracing::info!("Updated post {}", post.id);

    print_post(&post, format)
}
