use blog_api::types::{Inserted, Post, PostPage, TagMetric};
use blog_api::ErrorBody;
use chrono::{TimeZone, Utc};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_post_page() {
    let json = load_fixture("posts.json");
    let page: PostPage = serde_json::from_str(&json).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 2);

    let post = &page.items[0];
    assert_eq!(post.id, "66f1c2a9e4b0a1b2c3d4e5f6");
    assert_eq!(
        post.published_at,
        Some(Utc.with_ymd_and_hms(2025, 9, 14, 10, 0, 0).unwrap())
    );
    assert_eq!(
        post.created_at,
        Utc.with_ymd_and_hms(2025, 9, 9, 10, 0, 0).unwrap()
    );
}

#[test]
fn deserialize_empty_page() {
    let json = load_fixture("posts_empty.json");
    let page: PostPage = serde_json::from_str(&json).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
}

#[test]
fn post_without_tags_or_published_at() {
    let post: Post = serde_json::from_str(
        r#"{"_id":"a","title":"Arquitectura","author":"C","content":"x","published":false,"createdAt":"2025-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert!(post.tags.is_empty());
    assert!(post.published_at.is_none());

    let out = serde_json::to_value(&post).unwrap();
    assert!(out.get("tags").is_none());
    assert!(out.get("publishedAt").is_none());
    assert_eq!(out["_id"], "a");
}

#[test]
fn deserialize_tag_metrics() {
    let json = load_fixture("tag_metrics.json");
    let metrics: Vec<TagMetric> = serde_json::from_str(&json).unwrap();
    assert_eq!(metrics.len(), 3);
    assert_eq!(metrics[1].tag, "go");
}

#[test]
fn deserialize_inserted_and_error_body() {
    let inserted: Inserted = serde_json::from_str(r#"{"insertedID":"abc"}"#).unwrap();
    assert_eq!(inserted.inserted_id, "abc");

    let body: ErrorBody = serde_json::from_str(&load_fixture("error_validation.json")).unwrap();
    assert_eq!(body.code, 400);
    assert!(body.details.is_some());
}
