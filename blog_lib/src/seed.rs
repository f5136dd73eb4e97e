//! Sample dataset for the `posts` collection and its index definitions.
//!
//! [`seed_posts`] yields twelve fixed posts whose timestamps are whole days
//! before a reference instant. Unpublished posts carry no `publishedAt`.
//! [`seed_via_api`] loads them through the backend, which owns timestamps,
//! so only the editable fields survive that path.

use blog_api::types::{Inserted, PostInput};
use blog_api::Client;
use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};

use crate::error::BlogError;

/// Collection the seed documents belong to.
pub const COLLECTION: &str = "posts";

pub const AUTHORS: [&str; 4] = [
    "Ana García",
    "Carlos López",
    "María Rodríguez",
    "Christopher Jackson",
];

pub const TAGS: [&str; 7] = [
    "go",
    "mongodb",
    "api",
    "frontend",
    "vue",
    "nuxt",
    "performance",
];

/// A seed document as stored in the collection.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeedPost {
    pub title: String,
    pub author: String,
    pub content: String,
    pub tags: Vec<String>,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl SeedPost {
    /// The create payload for this document.
    pub fn to_input(&self) -> PostInput {
        PostInput {
            title: self.title.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            published: self.published,
        }
    }
}

/// Index key direction or type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKey {
    Ascending,
    Descending,
    Text,
}

impl Serialize for IndexKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IndexKey::Ascending => serializer.serialize_i32(1),
            IndexKey::Descending => serializer.serialize_i32(-1),
            IndexKey::Text => serializer.serialize_str("text"),
        }
    }
}

/// A named index over ordered keys.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: &'static str,
    pub keys: &'static [(&'static str, IndexKey)],
}

/// Indexes the feed and search queries rely on.
pub const INDEXES: [IndexSpec; 2] = [
    IndexSpec {
        name: "text_title_content",
        keys: &[("title", IndexKey::Text), ("content", IndexKey::Text)],
    },
    IndexSpec {
        name: "idx_published_publishedAt",
        keys: &[
            ("published", IndexKey::Ascending),
            ("publishedAt", IndexKey::Descending),
        ],
    },
];

// (title, author index, content, tags, days since publication, days since creation)
type Row = (
    &'static str,
    usize,
    &'static str,
    &'static [&'static str],
    Option<i64>,
    i64,
);

const ROWS: [Row; 12] = [
    (
        "Introducción a MongoDB con Go",
        0,
        "Cómo integrar MongoDB con aplicaciones Go…",
        &["mongodb", "go", "backend"],
        Some(220),
        225,
    ),
    (
        "Construyendo APIs REST con Echo",
        1,
        "Crea APIs robustas con Echo y buenas prácticas.",
        &["go", "api", "rest"],
        Some(200),
        205,
    ),
    (
        "Frontend Moderno con Nuxt 3",
        2,
        "Novedades de Nuxt 3 y cómo aprovecharlas.",
        &["nuxt", "vue", "frontend"],
        None,
        180,
    ),
    (
        "Optimización de Consultas en MongoDB",
        0,
        "Índices, proyecciones y agregaciones eficientes.",
        &["mongodb", "performance", "database"],
        Some(160),
        165,
    ),
    (
        "Buenas prácticas en Go",
        1,
        "Patrones de diseño y organización de proyectos Go.",
        &["go"],
        Some(120),
        125,
    ),
    (
        "Arquitectura de una API limpia",
        3,
        "Separación por capas, DTOs, servicios y controladores.",
        &["api", "backend"],
        None,
        110,
    ),
    (
        "Vue 3: Composition API",
        2,
        "Cómo migrar de Options API a Composition.",
        &["vue", "frontend"],
        Some(95),
        100,
    ),
    (
        "Nuxt 3 + Tailwind: UI productiva",
        3,
        "Plantillas, layouts, components y slots.",
        &["nuxt", "frontend"],
        None,
        70,
    ),
    (
        "Paginar y filtrar en MongoDB",
        0,
        "Text search, sort y paginación con índices.",
        &["mongodb", "api"],
        Some(60),
        65,
    ),
    (
        "Optimización de rendimiento en Nuxt",
        2,
        "Hydration, lazy routes, image optimization.",
        &["nuxt", "performance", "frontend"],
        None,
        40,
    ),
    (
        "Mejores prácticas con Docker en Go",
        1,
        "Multi-stage builds, minimal images y healthchecks.",
        &["go", "api"],
        Some(20),
        25,
    ),
    (
        "Agregaciones en MongoDB",
        0,
        "Pipelines, $match, $group, $sort, $limit.",
        &["mongodb", "performance"],
        Some(5),
        10,
    ),
];

/// Builds the seed documents relative to `now`.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<SeedPost> {
    let days_ago = |n: i64| now - Duration::days(n);
    ROWS.iter()
        .map(|&(title, author, content, tags, published, created)| SeedPost {
            title: title.to_string(),
            author: AUTHORS[author].to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published: published.is_some(),
            published_at: published.map(days_ago),
            created_at: days_ago(created),
        })
        .collect()
}

/// Creates every post through the API, in order, stopping at the first failure.
pub async fn seed_via_api(client: &Client, posts: &[SeedPost]) -> Result<Vec<Inserted>, BlogError> {
    let mut inserted = Vec::with_capacity(posts.len());
    for post in posts {
        let result = client.create_post(&post.to_input()).await?;
        tracing::info!("Seeded '{}' as {}", post.title, result.inserted_id);
        inserted.push(result);
    }
    Ok(inserted)
}
