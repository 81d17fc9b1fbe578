//! # User Client
//!
//! Wraps a `ResourceRepository<User>` and exposes account lookups.
use crate::model::{Role, User, UserCreate, UserId, UserUpdate};
use crate::users::credentials::{self, Credentials};
use crate::users::UserError;
use async_trait::async_trait;
use shop_gateway::{GatewayError, ResourceClient, ResourceRepository};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct UserClient {
    inner: ResourceRepository<User>,
}

impl UserClient {
    pub fn new(inner: ResourceRepository<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_role(&self, id: UserId, role: Role) -> Result<User, UserError> {
        let update = UserUpdate {
            role: Some(role),
            ..UserUpdate::default()
        };
        self.update_user(id, update).await
    }

    #[instrument(skip(self))]
    pub async fn user_by_email(&self, email: &str) -> Result<User, UserError> {
        self.credentials_by_email(email)
            .await?
            .map(|c| c.user)
            .ok_or_else(|| GatewayError::not_found("User", email).into())
    }

    pub async fn credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, UserError> {
        let mut conn = self.inner.gateway().acquire().await?;
        Ok(credentials::by_email(&mut conn, email).await?)
    }

    pub async fn credentials(&self, id: UserId) -> Result<Option<Credentials>, UserError> {
        let mut conn = self.inner.gateway().acquire().await?;
        Ok(credentials::by_id(&mut conn, id).await?)
    }
}

#[async_trait]
impl ResourceClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceRepository<User> {
        &self.inner
    }

    fn map_error(e: GatewayError) -> Self::Error {
        UserError::from(e)
    }
}
