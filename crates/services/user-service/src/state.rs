//! Application state for dependency injection.

use std::sync::Arc;

use crate::repository::UserRepository;

/// Application state shared across handlers.
///
/// Built once after the database bootstrap and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}
