//! # Auth Client
//!
//! Registration, login, token refresh and password changes on top of the
//! [`UserClient`] and a [`TokenService`].
use crate::access::password::{hash_password, verify_password, MIN_PASSWORD_LEN};
use crate::access::{AccessError, AuthError, Identity, TokenKind, TokenService};
use crate::clients::UserClient;
use crate::model::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, Role, User, UserCreate,
    UserId, UserUpdate,
};
use crate::users::UserError;
use shop_gateway::ResourceClient;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct AuthClient {
    users: UserClient,
    tokens: TokenService,
}

impl AuthClient {
    pub fn new(users: UserClient, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Resolves an access token to the identity it was issued for.
    pub fn authenticate(&self, token: &str) -> Result<Identity, AccessError> {
        self.tokens
            .verify(token, TokenKind::Access)
            .map(|claims| claims.identity())
    }

    /// Creates a `user`-role account and signs it in.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AuthError> {
        let id = self
            .create_account(
                request.name,
                request.surname,
                request.email,
                request.phone,
                request.password,
                Role::User,
            )
            .await?;
        let user = self.users.require(id).await?;
        info!(user = %user.id, "Registered");
        self.sign_in(user)
    }

    /// Creates an account with an explicit role. Admin-only at the HTTP layer.
    #[instrument(skip(self, password))]
    pub async fn create_account(
        &self,
        name: String,
        surname: String,
        email: String,
        phone: Option<String>,
        password: String,
        role: Role,
    ) -> Result<UserId, AuthError> {
        check_password(&password)?;
        let password_hash = hash_password(&password)?;
        let id = self
            .users
            .create_user(UserCreate {
                name,
                surname,
                email,
                role,
                phone,
                password_hash,
            })
            .await?;
        Ok(id)
    }

    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let Some(credentials) = self.users.credentials_by_email(&request.email).await? else {
            warn!("Unknown email");
            return Err(AccessError::InvalidCredentials.into());
        };
        if !verify_password(&request.password, &credentials.password_hash)? {
            warn!(user = %credentials.user.id, "Wrong password");
            return Err(AccessError::InvalidCredentials.into());
        }
        info!(user = %credentials.user.id, "Logged in");
        self.sign_in(credentials.user)
    }

    /// Exchanges a refresh token for a fresh pair. The user is re-read so role
    /// changes take effect.
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, AuthError> {
        let claims = self.tokens.verify(refresh_token, TokenKind::Refresh)?;
        let Some(user) = self.users.get(claims.user_id).await? else {
            warn!(user = %claims.user_id, "Refresh for deleted user");
            return Err(AccessError::InvalidToken("user no longer exists".into()).into());
        };
        self.sign_in(user)
    }

    #[instrument(skip(self, request))]
    pub async fn change_password(&self, user_id: UserId, request: ChangePasswordRequest) -> Result<(), AuthError> {
        let credentials = self
            .users
            .credentials(user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("User not found: {user_id}")))?;
        if !verify_password(&request.old_password, &credentials.password_hash)? {
            warn!("Wrong old password");
            return Err(UserError::ValidationError("old password is incorrect".into()).into());
        }
        check_password(&request.new_password)?;

        let update = UserUpdate {
            password_hash: Some(hash_password(&request.new_password)?),
            ..UserUpdate::default()
        };
        self.users.update_user(user_id, update).await?;
        info!("Password changed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: UserId) -> Result<User, AuthError> {
        Ok(self.users.require(user_id).await?)
    }

    fn sign_in(&self, user: User) -> Result<AuthResponse, AuthError> {
        let access = self.tokens.issue(&user, TokenKind::Access)?;
        let refresh = self.tokens.issue(&user, TokenKind::Refresh)?;
        Ok(AuthResponse {
            user,
            access_token: access.token,
            refresh_token: refresh.token,
            expires_at: access.expires_at,
        })
    }
}

fn check_password(password: &str) -> Result<(), UserError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(UserError::ValidationError(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
