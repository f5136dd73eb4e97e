use anyhow::Result;
use blog_lib::seed::{self, COLLECTION};
use blog_lib::{Client, INDEXES};
use chrono::Utc;
use clap::Args;
use serde_json::json;

use crate::output::{print_json, print_seeded, OutputFormat};

#[derive(Args)]
pub struct SeedArgs {
    /// Print the seed documents and index definitions instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(args: &SeedArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let posts = seed::seed_posts(Utc::now());

    if args.dry_run {
        print_json(&json!({
            "collection": COLLECTION,
            "documents": posts,
            "indexes": INDEXES,
        }));
        return Ok(());
    }

    tracing::info!("Seeding {} posts into '{}'", posts.len(), COLLECTION);
    let inserted = seed::seed_via_api(client, &posts).await?;
    eprintln!("Inserted {} posts", inserted.len());

    print_seeded(&posts, &inserted, format)
}
