//! HTTP request handlers.

pub mod health_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use user_handler::user_routes;

use common::AppError;

/// Method fallback for routes that exist under another verb.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
