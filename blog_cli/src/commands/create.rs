use anyhow::Result;
use blog_lib::validation;
use blog_lib::Client;
use clap::Args;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct CreateArgs {
    /// Post title (5-140 characters)
    #[arg(long)]
    pub title: String,

    /// Author name
    #[arg(long)]
    pub author: String,

    /// Post body
    #[arg(long)]
    pub content: String,

    /// Tag to attach (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Publish immediately instead of saving as a draft
    #[arg(long)]
    pub published: bool,
}

pub async fn run(args: &CreateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let input = validation::new_post(
        &args.title,
        &args.author,
        &args.content,
        &args.tags,
        args.published,
    )?;

    let inserted = client.create_post(&input).await?;
    tracing::info!("Created post '{}'", input.title);

    match format {
        OutputFormat::Json => print_json(&inserted),
        _ => println!("{}", inserted.inserted_id),
    }

    Ok(())
}
