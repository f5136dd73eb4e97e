use anyhow::Result;
use blog_lib::validation;
use blog_lib::Client;
use clap::Args;

#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the post to delete
    #[arg(long)]
    pub id: String,
}

pub async fn run(args: &DeleteArgs, client: &Client) -> Result<()> {
    let id = validation::validate_post_id(&args.id)?;
    client.delete_post(&id).await?;
    eprintln!("Deleted post {}", id);
    Ok(())
}
