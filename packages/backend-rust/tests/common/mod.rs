#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use worddee_backend::config::Config;
use worddee_backend::db::config::DbConfig;
use worddee_backend::db::operations::{self, NewWord};
use worddee_backend::db::DatabaseProxy;

pub struct TestApp {
    pub router: Router,
    pub proxy: DatabaseProxy,
    _dir: TempDir,
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(self.router.clone(), request).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        send(self.router.clone(), request).await
    }

    pub async fn insert_word(&self, word: &str, level: &str) -> i64 {
        insert_word(&self.proxy, word, level).await
    }
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn test_db_config(dir: &TempDir) -> DbConfig {
    DbConfig::at_path(dir.path().join("data").join("worddee-test.db"))
}

pub async fn create_test_app(seed_words: bool) -> TestApp {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db_config = test_db_config(&dir);

    let mut config = Config::with_database(db_config.clone());
    config.seed_words = seed_words;

    let router = worddee_backend::create_app(&config).await;
    let proxy = DatabaseProxy::connect(db_config)
        .await
        .expect("failed to open test database");

    TestApp {
        router,
        proxy,
        _dir: dir,
    }
}

pub async fn insert_word(proxy: &DatabaseProxy, word: &str, level: &str) -> i64 {
    operations::insert_word(
        proxy,
        &NewWord {
            word,
            definition: "test definition",
            difficulty_level: level,
        },
    )
    .await
    .unwrap();

    sqlx::query_scalar(r#"SELECT "id" FROM "words" WHERE "word" = ?"#)
        .bind(word)
        .fetch_one(proxy.pool())
        .await
        .unwrap()
}
