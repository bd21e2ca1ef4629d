//! User document model for MongoDB.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use common::AppError;
use domain::{NewUser, User};

/// Stored shape of a user in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    /// Assigned by the server on insert when absent
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: i64,
}

/// Convert a creation payload into an insertable document
impl From<NewUser> for UserDocument {
    fn from(new_user: NewUser) -> Self {
        UserDocument {
            id: None,
            name: new_user.name,
            email: new_user.email,
            age: new_user.age,
        }
    }
}

/// Convert a stored document to the domain entity
impl TryFrom<UserDocument> for User {
    type Error = AppError;

    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| AppError::internal("user document without _id"))?;

        Ok(User {
            id: id.to_hex(),
            name: document.name,
            email: document.email,
            age: document.age,
        })
    }
}
