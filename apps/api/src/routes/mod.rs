pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::portfolio::handlers;
use crate::registry::handlers as components;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Component catalog
        .route("/api/v1/components", get(components::handle_list_components))
        .route(
            "/api/v1/components/:name",
            get(components::handle_get_component),
        )
        // Portfolio pipeline
        .route("/api/v1/portfolio/plan", post(handlers::handle_plan))
        .route("/api/v1/portfolio/generate", post(handlers::handle_generate))
        .route("/api/v1/portfolio/archive", post(handlers::handle_archive))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::registry::ComponentRegistry;
    use crate::selection::SelectorStrategy;

    fn config() -> Config {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            component_registry_path: None,
            selector_strategy: SelectorStrategy::Smart,
            merge_sparse_sections: false,
            portfolio_output_dir: None,
        }
    }

    fn app_with(config: Config) -> Router {
        build_router(AppState::new(config, ComponentRegistry::builtin().unwrap()))
    }

    fn app() -> Router {
        app_with(config())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn sample_request() -> Value {
        json!({
            "cv": {
                "hero": { "name": "Grace Hopper", "title": "Software Engineer" },
                "experience": [{ "title": "Rear Admiral", "company": "US Navy" }],
                "awards": [{ "title": "National Medal of Technology" }],
                "languages": ["English"]
            },
            "overrides": { "experience": "tracing-beam" }
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "folio-api");
        assert_eq!(body["strategy"], "smart");
    }

    #[tokio::test]
    async fn test_list_and_get_components() {
        let response = app()
            .oneshot(Request::get("/api/v1/components").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["count"], 21);
        assert_eq!(body["components"][0]["key"], "animated-testimonials");

        let response = app()
            .oneshot(Request::get("/api/v1/components/3d-card").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["key"], "three-d-card");
        assert_eq!(body["import"], "@/components/ui/3d-card");

        let response = app()
            .oneshot(Request::get("/api/v1/components/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_plan_applies_overrides() {
        let response = app()
            .oneshot(post_json("/api/v1/portfolio/plan", sample_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["strategy"], "smart");
        assert_eq!(body["selections"][0]["section"], "hero");
        let experience = body["selections"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["section"] == "experience")
            .unwrap();
        assert_eq!(experience["component_type"], "tracing-beam");
        assert!(body["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["kind"] == "merge"));
    }

    #[tokio::test]
    async fn test_merge_flag_per_request() {
        let mut request = sample_request();
        request["merge_sparse_sections"] = json!(true);
        let body = json_body(
            app()
                .oneshot(post_json("/api/v1/portfolio/plan", request))
                .await
                .unwrap(),
        )
        .await;
        let sections: Vec<&str> = body["selections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["section"].as_str().unwrap())
            .collect();
        assert!(sections.contains(&"highlights"));
        assert!(!sections.contains(&"awards"));
    }

    #[tokio::test]
    async fn test_generate_returns_files() {
        let response = app()
            .oneshot(post_json("/api/v1/portfolio/generate", sample_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["build_id"].is_string());
        assert_eq!(body["archetype"], "technical");
        assert!(body["files"]["app/page.tsx"].is_string());
        assert!(body["files"]["components/sections/ExperienceSection.tsx"]
            .as_str()
            .unwrap()
            .contains("TracingBeam"));
    }

    #[tokio::test]
    async fn test_generate_writes_to_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(Config {
            portfolio_output_dir: Some(dir.path().display().to_string()),
            ..config()
        });
        let body = json_body(
            app.oneshot(post_json("/api/v1/portfolio/generate", sample_request()))
                .await
                .unwrap(),
        )
        .await;
        let build_dir = dir.path().join(body["build_id"].as_str().unwrap());
        assert!(build_dir.join("package.json").is_file());
        assert!(build_dir.join("components/sections/HeroSection.tsx").is_file());
    }

    #[tokio::test]
    async fn test_unwritable_output_dir_is_reported() {
        // a plain file where the output directory should be
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let app = app_with(Config {
            portfolio_output_dir: Some(blocker.path().display().to_string()),
            ..config()
        });
        let response = app
            .oneshot(post_json("/api/v1/portfolio/generate", sample_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"]["code"], "ARCHIVE_ERROR");
    }

    #[tokio::test]
    async fn test_archive_returns_zip() {
        let response = app()
            .oneshot(post_json("/api/v1/portfolio/archive", sample_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/zip"
        );
        assert!(response.headers().contains_key("x-build-id"));
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"grace-hopper-portfolio.zip\""
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.to_vec())).unwrap();
        assert!(archive.file_names().any(|name| name == "package.json"));
    }

    #[tokio::test]
    async fn test_empty_cv_is_rejected() {
        let response = app()
            .oneshot(post_json("/api/v1/portfolio/generate", json!({ "cv": {} })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }
}
