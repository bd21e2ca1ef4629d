//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use common::ErrorResponse;
use domain::{NewUser, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
    ),
    components(
        schemas(
            User,
            NewUser,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Users", description = "User record endpoints"),
    )
)]
pub struct ApiDoc;
