//! Lookups that need the stored password hash.

use crate::model::{User, UserId};
use shop_gateway::GatewayError;
use sqlx::SqliteConnection;

/// A user row together with its password hash.
#[derive(Clone, sqlx::FromRow)]
pub struct Credentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

pub async fn by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<Credentials>, GatewayError> {
    let found = sqlx::query_as::<_, Credentials>(
        r#"SELECT id, name, surname, email, role, phone, password_hash FROM "user" WHERE email = ?"#,
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(found)
}

pub async fn by_id(conn: &mut SqliteConnection, id: UserId) -> Result<Option<Credentials>, GatewayError> {
    let found = sqlx::query_as::<_, Credentials>(
        r#"SELECT id, name, surname, email, role, phone, password_hash FROM "user" WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(found)
}
