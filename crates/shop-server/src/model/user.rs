use crate::model::Role;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(pub i64);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A user as returned by the API. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Insert payload. `password_hash` is already hashed.
#[derive(Clone)]
pub struct UserCreate {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub password_hash: String,
}

impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}

/// Changes applied to a user row. Absent fields are left untouched.
/// `phone: Some(None)` clears the stored phone.
#[derive(Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub role: Option<Role>,
    pub password_hash: Option<String>,
}

impl std::fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserUpdate")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("role", &self.role)
            .field("password_changed", &self.password_hash.is_some())
            .finish()
    }
}

/// Public registration body.
#[derive(Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Admin body for creating a user with an explicit role.
#[derive(Clone, Deserialize)]
pub struct NewUserRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Profile fields a user may change. `id` selects the row.
///
/// A missing `phone` key keeps the stored phone; `"phone": null` clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub id: UserId,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<Option<String>>,
}

// Only called when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Option<String>>, D::Error> {
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleUpdate {
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailLookup {
    pub email: String,
}

#[derive(Clone, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by register, login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
