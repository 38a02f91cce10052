//! HTTP Routes
//!
//! API Endpoints:
//! - /api/generate-story    POST  根据创意生成故事
//! - /api/regenerate-scene  POST  重写场景文字 / 重新配图
//! - /api/export-pdf        POST  导出 PDF
//! - /api/ask               POST  问答
//! - /api/share             POST  分享故事
//! - /api/test-openai       GET   演示模式自检
//! - /api/health            GET   健康检查
//! - /story/{id}            GET   查看分享的故事
//! - /static/{file}         GET   本地缓存的图片

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(static_dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/story/:story_id", get(handlers::view_shared_story))
        .nest_service("/static", ServeDir::new(static_dir))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-story", post(handlers::generate_story))
        .route("/regenerate-scene", post(handlers::regenerate_scene))
        .route("/export-pdf", post(handlers::export_pdf))
        .route("/ask", post(handlers::ask_question))
        .route("/share", post(handlers::share_story))
        .route("/test-openai", get(handlers::test_openai))
        .route("/health", get(handlers::health))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::Router;
    use http::{header, HeaderMap, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::application::test_support::{
        FakeImageFetcher, FakeImageProvider, MemoryImageStorage, RecordingPdfRenderer,
    };
    use crate::infrastructure::http::{AppState, HttpServer, ServerConfig, StateOptions};
    use crate::infrastructure::memory::InMemoryStoryStore;

    struct TestApp {
        router: Router,
        _static_dir: tempfile::TempDir,
    }

    fn test_app(images: FakeImageProvider) -> TestApp {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join("cached.jpg"), b"jpeg bytes").unwrap();

        let options = StateOptions {
            static_dir: static_dir.path().to_path_buf(),
            ..StateOptions::default()
        };
        let state = AppState::new(
            Arc::new(images),
            Arc::new(FakeImageFetcher::default()),
            Arc::new(MemoryImageStorage::default()),
            Arc::new(RecordingPdfRenderer::default()),
            Arc::new(InMemoryStoryStore::new()),
            options,
        );
        let router = HttpServer::new(ServerConfig::default(), state).router();

        TestApp {
            router,
            _static_dir: static_dir,
        }
    }

    struct TestResponse {
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    }

    impl TestResponse {
        fn json(&self) -> Value {
            serde_json::from_slice(&self.body).unwrap()
        }
    }

    async fn send(app: &TestApp, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::HOST, "stories.test");
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn post_json(app: &TestApp, uri: &str, body: Value) -> TestResponse {
        send(app, Method::POST, uri, Some(&body.to_string())).await
    }

    fn sample_story() -> Value {
        json!({
            "title": "The Tale of tea",
            "genre": "fantasy",
            "theme": "An adventurous story about tea",
            "scenes": [{
                "scene_number": 1,
                "title": "The Beginning",
                "text": "In a fantasy world, our story begins with tea.",
                "image_prompt": "A teapot",
                "image_url": null
            }]
        })
    }

    #[tokio::test]
    async fn test_generate_story_returns_five_illustrated_scenes() {
        let app = test_app(FakeImageProvider::new());
        let response = post_json(&app, "/api/generate-story", json!({"idea": "a lost key"})).await;

        assert_eq!(response.status, StatusCode::OK);
        let story = response.json();
        assert_eq!(story["title"], "The Tale of a lost key");
        let scenes = story["scenes"].as_array().unwrap();
        assert_eq!(scenes.len(), 5);
        for (i, scene) in scenes.iter().enumerate() {
            assert_eq!(scene["scene_number"], json!(i + 1));
            assert!(scene["image_url"].as_str().unwrap().starts_with("/static/"));
        }
    }

    #[tokio::test]
    async fn test_missing_fields_are_bad_requests() {
        let app = test_app(FakeImageProvider::new());

        let cases = [
            ("/api/generate-story", json!({}), "Story idea is required"),
            ("/api/generate-story", json!({"idea": "   "}), "Story idea is required"),
            ("/api/ask", json!({}), "Question is required"),
            ("/api/share", json!({}), "Story data is required"),
            ("/api/export-pdf", json!({"story": null}), "Story data is required"),
        ];
        for (uri, body, message) in cases {
            let response = post_json(&app, uri, body).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(response.json()["error"], message, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test_app(FakeImageProvider::new());
        let response = send(&app, Method::POST, "/api/generate-story", Some("{not json")).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.json()["error"].is_string());
    }

    #[tokio::test]
    async fn test_share_then_view_round_trip() {
        let app = test_app(FakeImageProvider::new());
        let story = sample_story();

        let shared = post_json(&app, "/api/share", json!({"story": story.clone()})).await;
        assert_eq!(shared.status, StatusCode::OK);
        let shared = shared.json();
        let story_id = shared["story_id"].as_str().unwrap();
        assert_eq!(
            shared["share_url"],
            format!("http://stories.test/story/{}", story_id)
        );

        let viewed = send(&app, Method::GET, &format!("/story/{}", story_id), None).await;
        assert_eq!(viewed.status, StatusCode::OK);
        assert_eq!(viewed.json(), story);
    }

    #[tokio::test]
    async fn test_unknown_story_is_not_found() {
        let app = test_app(FakeImageProvider::new());

        for id in ["00000000-0000-4000-8000-000000000000", "not-a-uuid"] {
            let response = send(&app, Method::GET, &format!("/story/{}", id), None).await;
            assert_eq!(response.status, StatusCode::NOT_FOUND);
            assert_eq!(response.json()["error"], "Story not found");
        }
    }

    #[tokio::test]
    async fn test_regenerate_scene_modes() {
        let app = test_app(FakeImageProvider::new());
        let text = "The robot walked to the door. It was a long and quiet walk!";

        let both = post_json(
            &app,
            "/api/regenerate-scene",
            json!({"scene_text": text, "image_prompt": "A robot"}),
        )
        .await;
        assert_eq!(both.status, StatusCode::OK);
        let both = both.json();
        assert!(both["new_text"].as_str().unwrap().contains("mechanical being"));
        assert!(both["new_image_url"].is_string());

        let text_only = post_json(
            &app,
            "/api/regenerate-scene",
            json!({"scene_text": "Short text.", "type": "text"}),
        )
        .await
        .json();
        assert_eq!(text_only, json!({"new_text": "Short text."}));

        for mode in [json!("audio"), json!(null)] {
            let unknown = post_json(&app, "/api/regenerate-scene", json!({"type": mode})).await;
            assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
            assert_eq!(unknown.json()["error"], "No changes were made");
        }
    }

    #[tokio::test]
    async fn test_ask_failure_carries_details() {
        let app = test_app(FakeImageProvider::failing_on(&["robot"]));

        let ok = post_json(&app, "/api/ask", json!({"question": "Tell me a story"})).await;
        assert_eq!(ok.status, StatusCode::OK);
        assert!(ok.json()["answer"].as_str().unwrap().starts_with("Stories are"));

        let failed = post_json(&app, "/api/ask", json!({"question": "What about the robot?"})).await;
        assert_eq!(failed.status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = failed.json();
        assert_eq!(body["error"], "Failed to generate response");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn test_export_pdf_is_attachment() {
        let app = test_app(FakeImageProvider::new());
        let response = post_json(&app, "/api/export-pdf", json!({"story": sample_story()})).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.headers[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"The_Tale_of_tea.pdf\""
        );
        assert!(response.body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_health_and_demo_mode() {
        let app = test_app(FakeImageProvider::new());

        let health = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(
            health.json(),
            json!({"status": "healthy", "message": "AI Storyteller API is running"})
        );

        let demo = send(&app, Method::GET, "/api/test-openai", None).await.json();
        assert_eq!(demo["status"], "success");
        assert_eq!(demo["api_response"], "Demo mode active - using pre-generated content");
    }

    #[tokio::test]
    async fn test_static_files() {
        let app = test_app(FakeImageProvider::new());

        let found = send(&app, Method::GET, "/static/cached.jpg", None).await;
        assert_eq!(found.status, StatusCode::OK);
        assert_eq!(found.body, b"jpeg bytes");

        let missing = send(&app, Method::GET, "/static/missing.jpg", None).await;
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
    }
}
