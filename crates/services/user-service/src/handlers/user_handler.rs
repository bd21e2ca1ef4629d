//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, ErrorResponse};
use domain::{NewUser, User};

use super::method_not_allowed;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/api/users",
        get(list_users)
            .post(create_user)
            .fallback(method_not_allowed),
    )
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_repo.create(payload).await?;
    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, possibly empty", body = Vec<User>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_repo.list().await?;
    Ok(Json(users))
}
