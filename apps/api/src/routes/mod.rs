pub mod health;
pub mod render;
pub mod themes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Theme API
        .route("/api/v1/themes", get(themes::handle_list_themes))
        .route("/api/v1/themes/:name", get(themes::handle_get_theme))
        // Render API
        .route("/api/v1/render", post(render::handle_render))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::config::Config;
    use crate::themes::ThemeRegistry;

    fn app() -> Router {
        build_router(AppState::new(Config::default(), ThemeRegistry::builtin()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn render_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/render")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "folio-api");
    }

    #[tokio::test]
    async fn test_list_themes() {
        let (status, body) = send(get_request("/api/v1/themes")).await;
        assert_eq!(status, StatusCode::OK);
        let themes = body.as_array().unwrap();
        assert_eq!(themes.len(), 2);
        assert_eq!(themes[0]["theme"], "classic");
        assert_eq!(themes[1]["sidebar"]["sidebar_width"], "30%");
    }

    #[tokio::test]
    async fn test_unknown_theme_is_404() {
        let (status, body) = send(get_request("/api/v1/themes/moderncv")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_render_sidebar_theme() {
        let payload = json!({
            "cv": {
                "name": "Jane Doe",
                "headline": "Engineer",
                "email": "jane@x.com",
                "sections": {
                    "experience": ["Acme"],
                    "skills": ["Rust"],
                    "education": ["MIT"]
                }
            },
            "design": {"theme": "sidebar"}
        });
        let (status, body) = send(render_request(&payload.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme"], "sidebar");
        assert_eq!(body["sidebar_sections"], json!(["skills"]));
        assert_eq!(body["main_sections"], json!(["experience", "education"]));

        let markup = body["markup"].as_str().unwrap();
        assert!(markup.starts_with("= Jane Doe\n"));
        assert!(markup.contains("#grid(\n  columns: (30%, 1fr),"));
        assert!(!markup.contains("#set page("));
        assert!(Uuid::parse_str(body["render_id"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_render_with_preamble() {
        let payload = json!({"cv": {"name": "Jane"}, "include_preamble": true});
        let (status, body) = send(render_request(&payload.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme"], "classic");
        assert!(body["markup"].as_str().unwrap().starts_with("#set page("));
    }

    #[tokio::test]
    async fn test_render_bad_position_is_config_error() {
        let payload = json!({
            "cv": {"name": "Jane", "photo": "me.jpg"},
            "design": {"header": {"photo_position": "center"}}
        });
        let (status, body) = send(render_request(&payload.to_string())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "CONFIG_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("header.photo_position"));
    }

    #[tokio::test]
    async fn test_render_malformed_json_is_validation_error() {
        let (status, body) = send(render_request("{\"cv\": ")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
