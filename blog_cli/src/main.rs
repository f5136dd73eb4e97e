mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use blog_lib::{ApiConfig, BlogError, Client, RequestFailure};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "blogctl")]
#[command(about = "Manage blog posts through the blog backend API")]
struct Cli {
    /// Output format: table, json, csv, markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base path or URL (overrides BLOG_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Origin joined in front of a relative base path (overrides BLOG_API_ORIGIN)
    #[arg(long, global = true)]
    origin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or fetch one by ID
    Posts(commands::posts::PostsArgs),
    /// Create a post
    Create(commands::create::CreateArgs),
    /// Replace a post's fields
    Update(commands::update::UpdateArgs),
    /// Delete a post
    Delete(commands::delete::DeleteArgs),
    /// Show the most used tags
    Tags(commands::tags::TagsArgs),
    /// Load the sample dataset
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blogctl=info,blog_lib=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::parse(&cli.output);
    let client = Client::new(build_config(
        ApiConfig::from_env(),
        cli.api_base.as_deref(),
        cli.origin.as_deref(),
    ));
    tracing::debug!("Using API base {}", client.config().api_base);

    match &cli.command {
        Commands::Posts(args) => commands::posts::run(args, &client, &format).await?,
        Commands::Create(args) => commands::create::run(args, &client, &format).await?,
        Commands::Update(args) => commands::update::run(args, &client, &format).await?,
        Commands::Delete(args) => commands::delete::run(args, &client).await?,
        Commands::Tags(args) => commands::tags::run(args, &client, &format).await?,
        Commands::Seed(args) => commands::seed::run(args, &client, &format).await?,
    }

    Ok(())
}

fn build_config(mut config: ApiConfig, api_base: Option<&str>, origin: Option<&str>) -> ApiConfig {
    if let Some(api_base) = api_base {
        config.api_base = api_base.to_string();
    }
    if let Some(origin) = origin {
        config = config.with_origin(origin);
    }
    config
}

fn request_failure(err: &anyhow::Error) -> Option<&RequestFailure> {
    if let Some(failure) = err.downcast_ref::<RequestFailure>() {
        return Some(failure);
    }
    match err.downcast_ref::<BlogError>() {
        Some(BlogError::Api(failure)) => Some(failure),
        _ => None,
    }
}

fn report(err: &anyhow::Error) {
    match request_failure(err) {
        Some(failure) => {
            eprintln!("error {}: {}", failure.code, failure.message);
            if let Some(details) = &failure.details {
                eprintln!("{:#}", details);
            }
        }
        None => eprintln!("error: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_environment() {
        let config = build_config(
            ApiConfig::default(),
            Some("http://backend:4000/api"),
            Some("https://blog.example.com"),
        );
        assert_eq!(config.api_base, "http://backend:4000/api");
        assert_eq!(config.origin.as_deref(), Some("https://blog.example.com"));
    }

    #[test]
    fn test_missing_flags_keep_environment() {
        let config = build_config(ApiConfig::new("/v2"), None, None);
        assert_eq!(config, ApiConfig::new("/v2"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "blogctl",
            "posts",
            "--tag",
            "go",
            "--output",
            "json",
            "--api-base",
            "/v2",
        ])
        .unwrap();
        assert_eq!(cli.output, "json");
        assert_eq!(cli.api_base.as_deref(), Some("/v2"));
        assert!(matches!(cli.command, Commands::Posts(ref a) if a.tag.as_deref() == Some("go")));
    }

    #[test]
    fn test_repeated_tags_on_create() {
        let cli = Cli::try_parse_from([
            "blogctl", "create", "--title", "Hola mundo", "--author", "Ana", "--content", "x",
            "--tag", "go", "--tag", "api", "--published",
        ])
        .unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.tags, vec!["go", "api"]);
                assert!(args.published);
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_api_failure_is_found_through_blog_error() {
        let failure = blog_lib::blog_api::normalize(blog_lib::blog_api::TransportError::Status {
            status: 404,
            data: Some(serde_json::json!({"code": 404, "message": "Recurso no encontrado"})),
        });
        let err = anyhow::Error::from(BlogError::Api(failure));
        let found = request_failure(&err).unwrap();
        assert_eq!(found.code, 404);
        assert_eq!(found.message, "Recurso no encontrado");
    }
}
