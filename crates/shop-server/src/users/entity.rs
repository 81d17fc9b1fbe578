//! Resource implementation for [`User`].

use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use shop_gateway::{GatewayError, Resource};
use sqlx::SqliteConnection;

#[async_trait]
impl Resource for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;

    const TABLE: &'static str = "\"user\"";
    const COLUMNS: &'static str = "id, name, surname, email, role, phone";

    async fn insert(conn: &mut SqliteConnection, params: &UserCreate) -> Result<UserId, GatewayError> {
        let result = sqlx::query(
            r#"INSERT INTO "user" (name, surname, email, role, phone, password_hash) VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&params.name)
        .bind(&params.surname)
        .bind(&params.email)
        .bind(params.role)
        .bind(&params.phone)
        .bind(&params.password_hash)
        .execute(&mut *conn)
        .await?;
        Ok(UserId(result.last_insert_rowid()))
    }

    async fn apply_update(conn: &mut SqliteConnection, id: &UserId, update: &UserUpdate) -> Result<(), GatewayError> {
        sqlx::query(
            r#"UPDATE "user" SET
                   name = COALESCE(?, name),
                   surname = COALESCE(?, surname),
                   email = COALESCE(?, email),
                   phone = CASE WHEN ? THEN ? ELSE phone END,
                   role = COALESCE(?, role),
                   password_hash = COALESCE(?, password_hash)
               WHERE id = ?"#,
        )
        .bind(&update.name)
        .bind(&update.surname)
        .bind(&update.email)
        .bind(update.phone.is_some())
        .bind(update.phone.clone().flatten())
        .bind(update.role)
        .bind(&update.password_hash)
        .bind(*id)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    async fn on_create(conn: &mut SqliteConnection, params: &UserCreate) -> Result<(), GatewayError> {
        validate_names(&params.name, &params.surname)?;
        validate_email(&params.email)?;
        if email_taken(conn, &params.email, None).await? {
            return Err(GatewayError::Conflict("user with this email already exists".into()));
        }
        Ok(())
    }

    async fn on_update(&self, conn: &mut SqliteConnection, update: &UserUpdate) -> Result<(), GatewayError> {
        validate_names(
            update.name.as_deref().unwrap_or(&self.name),
            update.surname.as_deref().unwrap_or(&self.surname),
        )?;
        if let Some(email) = &update.email {
            validate_email(email)?;
            if email_taken(conn, email, Some(self.id)).await? {
                return Err(GatewayError::Conflict("user with this email already exists".into()));
            }
        }
        Ok(())
    }
}

fn validate_names(name: &str, surname: &str) -> Result<(), GatewayError> {
    if name.trim().is_empty() || surname.trim().is_empty() {
        return Err(GatewayError::Rejected("name and surname are required".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), GatewayError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(GatewayError::Rejected(format!("invalid email: {email}"))),
    }
}

async fn email_taken(conn: &mut SqliteConnection, email: &str, except: Option<UserId>) -> Result<bool, GatewayError> {
    let found: Option<UserId> = sqlx::query_scalar(r#"SELECT id FROM "user" WHERE email = ?"#)
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some_and(|id| Some(id) != except))
}
