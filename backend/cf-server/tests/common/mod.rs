#![allow(dead_code)]

//! Test infrastructure for cf-server API tests

use cf_auth::{Claims, JwtValidator};
use cf_core::{Project, ProjectAttributes, Review, ReviewAttributes};
use cf_db::{ProjectRepository, ReviewRepository};
use cf_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Create a test pool with in-memory SQLite.
///
/// A single connection, so every query sees the same database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    cf_db::migrate(&pool).await.expect("Failed to run migrations");

    pool
}

/// AppState with sign-in verification disabled (X-User-Id header mode)
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await, None)
}

/// AppState verifying HS256 bearer tokens signed with [`TEST_JWT_SECRET`]
pub async fn create_test_app_state_with_auth() -> AppState {
    let validator = JwtValidator::with_hs256(TEST_JWT_SECRET.as_bytes());
    AppState::new(create_test_pool().await, Some(Arc::new(validator)))
}

/// Bearer token for `user_id`, valid for an hour
pub fn bearer_token(user_id: Uuid) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + 3600,
        iat: now,
        name: Some("Test User".into()),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token");

    format!("Bearer {}", token)
}

/// Persist a valid project
pub async fn create_test_project(pool: &SqlitePool, name: &str, target_amount: f64) -> Project {
    let project = Project::create(ProjectAttributes {
        name: name.to_string(),
        description: "A sufficiently long description of the project".to_string(),
        looking_for: "Partnership".to_string(),
        target_amount: Some(target_amount),
        teams: "Core team".to_string(),
        github_link: "https://github.com/example/project".to_string(),
        web_url: "https://example.com".to_string(),
        image_file: "project.png".to_string(),
    })
    .expect("Test project should be valid");

    ProjectRepository::new(pool.clone())
        .create(&project)
        .await
        .expect("Failed to create test project");

    project
}

/// Persist a valid review on `project_id`
pub async fn create_test_review(pool: &SqlitePool, project_id: Uuid, stars: i32) -> Review {
    let review = Review::create(
        project_id,
        ReviewAttributes {
            name: "Reviewer".to_string(),
            remark: "Looks promising".to_string(),
            stars: Some(stars),
        },
        Uuid::new_v4(),
    )
    .expect("Test review should be valid");

    ReviewRepository::new(pool.clone())
        .create(&review)
        .await
        .expect("Failed to create test review");

    review
}

pub async fn project_count(pool: &SqlitePool) -> i64 {
    ProjectRepository::new(pool.clone())
        .count()
        .await
        .expect("Failed to count projects")
}

pub async fn review_count(pool: &SqlitePool) -> i64 {
    ReviewRepository::new(pool.clone())
        .count()
        .await
        .expect("Failed to count reviews")
}

/// Build a request with an optional JSON body and extra headers
pub fn json_request(
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    headers: &[(&str, String)],
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, value);
    }

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send `request` through `app` and decode the JSON response body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
