//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// Stored user record.
///
/// The identifier is assigned by the store when the record is created and is
/// never empty for a record returned to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = "665f1c2e9b1d4a0f8c3e2a71"))]
    pub id: String,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Email address (not validated)
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub age: i64,
}

impl User {
    /// Attach a store-assigned identifier to a creation payload
    pub fn from_new(id: impl Into<String>, new_user: NewUser) -> Self {
        Self {
            id: id.into(),
            name: new_user.name,
            email: new_user.email,
            age: new_user.age,
        }
    }
}

/// User creation data transfer object.
///
/// Carries no identifier: any `id` sent by a client is ignored. Absent fields
/// fall back to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct NewUser {
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Email address
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub age: i64,
}
