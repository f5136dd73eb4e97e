use blog_api::types::PostInput;
use blog_api::{Client, PostQuery, Query, SortDirection, TagMetricsQuery};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn api_client(server: &MockServer) -> Client {
    Client::with_base_url(&format!("{}/api", server.uri()))
}

#[tokio::test]
async fn list_posts_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("tag", "performance"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "2"))
        .and(query_param("sort", "-publishedAt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("posts.json")))
        .mount(&mock_server)
        .await;

    let query = PostQuery::default().with_tag("performance").with_limit(2);
    let page = api_client(&mock_server).list_posts(&query).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 12);
    assert_eq!(page.total_pages, 6);
    assert!(page.has_next());
    assert_eq!(page.items[0].author, "Ana García");
    assert!(page.items[1].published_at.is_none());
}

#[tokio::test]
async fn list_posts_ascending_published_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("published", "false"))
        .and(query_param("sort", "publishedAt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("posts_empty.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = PostQuery::default()
        .with_published(false)
        .with_sort_direction(SortDirection::Asc);
    let page = api_client(&mock_server).list_posts(&query).await.unwrap();
    assert!(page.items.is_empty());
    assert!(!page.has_next());
}

#[tokio::test]
async fn get_post_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/66f1c2a9e4b0a1b2c3d4e5f6"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("post.json")))
        .mount(&mock_server)
        .await;

    let post = api_client(&mock_server)
        .get_post("66f1c2a9e4b0a1b2c3d4e5f6")
        .await
        .unwrap();
    assert_eq!(post.title, "Agregaciones en MongoDB");
    assert_eq!(post.tags, vec!["mongodb", "performance"]);
}

#[tokio::test]
async fn get_post_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/66f1c2a9e4b0a1b2c3d4e5f6"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"code": 404, "message": "Recurso no encontrado"})),
        )
        .mount(&mock_server)
        .await;

    let err = api_client(&mock_server)
        .get_post("66f1c2a9e4b0a1b2c3d4e5f6")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.message, "Recurso no encontrado");
}

#[tokio::test]
async fn create_post_sends_input() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(body_json(json!({
            "title": "Introducción a Go",
            "author": "Alice",
            "content": "Texto del post...",
            "tags": ["go", "backend"],
            "published": true
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Location", "/api/posts/66f1c2a9e4b0a1b2c3d4e5f8")
                .set_body_json(json!({"insertedID": "66f1c2a9e4b0a1b2c3d4e5f8"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let input = PostInput {
        title: "Introducción a Go".to_string(),
        author: "Alice".to_string(),
        content: "Texto del post...".to_string(),
        tags: vec!["go".to_string(), "backend".to_string()],
        published: true,
    };
    let inserted = api_client(&mock_server).create_post(&input).await.unwrap();
    assert_eq!(inserted.inserted_id, "66f1c2a9e4b0a1b2c3d4e5f8");
}

#[tokio::test]
async fn update_post_returns_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/posts/66f1c2a9e4b0a1b2c3d4e5f6"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("post.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let input = PostInput {
        title: "Agregaciones en MongoDB".to_string(),
        author: "Ana García".to_string(),
        content: "Pipelines, $match, $group, $sort, $limit.".to_string(),
        tags: vec!["mongodb".to_string()],
        published: true,
    };
    let post = api_client(&mock_server)
        .update_post("66f1c2a9e4b0a1b2c3d4e5f6", &input)
        .await
        .unwrap();
    assert!(post.published);
    assert!(post.published_at.is_some());
}

#[tokio::test]
async fn delete_post_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/posts/66f1c2a9e4b0a1b2c3d4e5f6"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    api_client(&mock_server)
        .delete_post("66f1c2a9e4b0a1b2c3d4e5f6")
        .await
        .unwrap();
}

#[tokio::test]
async fn tag_metrics_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/metrics/by-tag"))
        .and(query_param("limit", "3"))
        .and(query_param("onlyPublished", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("tag_metrics.json")))
        .mount(&mock_server)
        .await;

    let metrics = api_client(&mock_server)
        .tag_metrics(&TagMetricsQuery::default().with_limit(3).with_only_published(true))
        .await
        .unwrap();
    assert_eq!(metrics.len(), 3);
    assert_eq!(metrics[0].tag, "mongodb");
    assert_eq!(metrics[2].count, 3);
}
