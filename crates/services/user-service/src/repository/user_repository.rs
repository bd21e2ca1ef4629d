//! User repository implementation backed by a MongoDB collection.

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};
use tokio::time::timeout;

use super::entities::UserDocument;
use crate::infra::Database;
use common::{AppError, AppResult, DatabaseConfig};
use domain::{NewUser, User, USERS_COLLECTION};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Operations are bounded by a timeout and never retried here.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; the store assigns the identifier
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// List every user in natural order (empty vector when none)
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    collection: Collection<UserDocument>,
    create_timeout: Duration,
    list_timeout: Duration,
}

impl UserStore {
    /// Create new repository instance over the `users` collection
    pub fn new(database: &Database, config: &DatabaseConfig) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
            create_timeout: config.create_timeout(),
            list_timeout: config.list_timeout(),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let document = UserDocument::from(new_user.clone());

        let insert = async { self.collection.insert_one(&document).await };

        let result = timeout(self.create_timeout, insert)
            .await
            .map_err(|_| AppError::timeout("insert user"))?
            .map_err(AppError::from)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::internal("insert returned a non-ObjectId identifier"))?;

        Ok(User::from_new(id.to_hex(), new_user))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let fetch = async {
            let cursor = self.collection.find(doc! {}).await?;
            cursor.try_collect::<Vec<UserDocument>>().await
        };

        let documents = timeout(self.list_timeout, fetch)
            .await
            .map_err(|_| AppError::timeout("list users"))?
            .map_err(AppError::from)?;

        documents.into_iter().map(User::try_from).collect()
    }
}
