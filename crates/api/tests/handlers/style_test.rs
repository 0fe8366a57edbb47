use std::sync::Arc;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use salon_core::errors::SalonError;
use salon_db::{create_memory_pool, mock::MockStore, schema::initialize_database, SqliteStore};
use serde_json::Value;

use crate::test_utils::{mock_server, server_for, sqlite_server, test_config};

#[tokio::test]
async fn test_list_styles_returns_seeded_catalog() {
    let server = sqlite_server().await;

    let response = server.get("/cortes").await;
    response.assert_status_ok();

    let styles: Vec<Value> = response.json();
    assert_eq!(styles.len(), 39);
    assert_eq!(styles[0]["id"], 1);
    assert_eq!(styles[0]["nombre"], "Pixie");
    assert_eq!(styles[0]["tipo"], "Dama");
}

#[tokio::test]
async fn test_health_reports_catalog_size() {
    let server = sqlite_server().await;

    let body: Value = server.get("/health").await.json();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["styles"], 39);
}

#[tokio::test]
async fn test_health_unavailable_when_store_fails() {
    let mut store = MockStore::new();
    store
        .expect_list_styles()
        .returning(|| Err(SalonError::Storage(eyre::eyre!("no such table: styles"))));

    let server = mock_server(store);

    server
        .get("/health")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_unknown_paths_are_served_from_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Salon</h1>").unwrap();

    let pool = create_memory_pool().await.unwrap();
    initialize_database(&pool).await.unwrap();
    let mut config = test_config();
    config.static_dir = Some(dir.path().to_path_buf());

    let server = server_for(Arc::new(SqliteStore::new(pool)), &config);

    let page = server.get("/index.html").await;
    page.assert_status_ok();
    assert_eq!(page.text(), "<h1>Salon</h1>");

    // API routes still take precedence over the static fallback
    server.get("/cortes").await.assert_status_ok();
    server
        .get("/missing.css")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
