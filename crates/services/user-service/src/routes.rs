//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::AppError;

use crate::handlers::{health_routes, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness probe (never touches the database)
        .merge(health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // User records
        .merge(user_routes())
        .fallback(not_found)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::repository::MockUserRepository;

    fn router(repo: MockUserRepository) -> Router {
        create_router(AppState::new(Arc::new(repo)))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_users(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_malformed_body_never_reaches_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(0);

        let response = router(repo)
            .oneshot(post_users(r#"{"name": "John Doe", "#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Invalid JSON");
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_bad_request() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(0);

        let response = router(repo)
            .oneshot(post_users(r#"{"name":"John Doe","email":"john@example.com","age":"thirty"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_failure_is_structured_500() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::timeout("insert user")));

        let response = router(repo)
            .oneshot(post_users(r#"{"name":"John Doe","email":"john@example.com","age":30}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], "A database error occurred");
    }

    #[tokio::test]
    async fn test_list_failure_is_structured_500() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Err(AppError::timeout("list users")));

        let response = router(repo)
            .oneshot(Request::builder().uri("/api/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_health_does_not_touch_store() {
        let repo = MockUserRepository::new();

        let response = router(repo)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "golang-app");
    }

    #[tokio::test]
    async fn test_unknown_route_is_structured_404() {
        let repo = MockUserRepository::new();

        let response = router(repo)
            .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "Resource not found");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let repo = MockUserRepository::new();

        let response = router(repo)
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = json_body(response).await;
        assert!(doc["paths"]["/api/users"]["post"].is_object());
        assert!(doc["paths"]["/health"]["get"].is_object());
    }
}
