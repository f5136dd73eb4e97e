use anyhow::Result;
use blog_lib::types::{Inserted, Post, TagMetric};
use blog_lib::SeedPost;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct PostRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    #[serde(rename = "Author")]
    author: String,
    #[tabled(rename = "Tags")]
    #[serde(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published_at: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created_at: String,
}

#[derive(Tabled, Serialize)]
struct TagRow {
    #[tabled(rename = "Tag")]
    #[serde(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Posts")]
    #[serde(rename = "Posts")]
    count: i64,
}

#[derive(Tabled, Serialize)]
struct SeededRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

// -- Row builders --

fn build_post_rows(posts: &[Post]) -> Vec<PostRow> {
    posts
        .iter()
        .map(|p| PostRow {
            id: p.id.clone(),
            title: p.title.clone(),
            author: p.author.clone(),
            tags: p.tags.join(", "),
            status: status(p.published).to_string(),
            published_at: p.published_at.map(format_date).unwrap_or_else(|| "-".to_string()),
            created_at: format_date(p.created_at),
        })
        .collect()
}

fn build_tag_rows(metrics: &[TagMetric]) -> Vec<TagRow> {
    metrics
        .iter()
        .map(|m| TagRow {
            tag: m.tag.clone(),
            count: m.count,
        })
        .collect()
}

fn build_seeded_rows(posts: &[SeedPost], inserted: &[Inserted]) -> Vec<SeededRow> {
    posts
        .iter()
        .zip(inserted)
        .map(|(p, i)| SeededRow {
            id: i.inserted_id.clone(),
            title: p.title.clone(),
            status: status(p.published).to_string(),
        })
        .collect()
}

// -- Rendering --

fn render<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_posts(posts: &[Post], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&posts);
            Ok(())
        }
        _ => render(build_post_rows(posts), format),
    }
}

pub fn print_post(post: &Post, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(post);
            Ok(())
        }
        _ => render(build_post_rows(std::slice::from_ref(post)), format),
    }
}

pub fn print_tags(metrics: &[TagMetric], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&metrics);
            Ok(())
        }
        _ => render(build_tag_rows(metrics), format),
    }
}

pub fn print_seeded(posts: &[SeedPost], inserted: &[Inserted], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&inserted);
            Ok(())
        }
        _ => render(build_seeded_rows(posts, inserted), format),
    }
}

// -- JSON output --

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn status(published: bool) -> &'static str {
    if published {
        "published"
    } else {
        "draft"
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
