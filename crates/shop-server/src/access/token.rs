//! HS256 access and refresh tokens.

use crate::access::{AccessError, Identity};
use crate::model::{Role, User, UserId};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id as a string.
    pub sub: String,
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: &User, kind: TokenKind, expires_in: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id.0.to_string(),
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            kind,
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id,
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// A signed token and the moment it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies tokens with one shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn issue(&self, user: &User, kind: TokenKind) -> Result<IssuedToken, AccessError> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };
        let claims = Claims::new(user, kind, ttl);
        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AccessError::Internal(e.to_string()))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AccessError::Internal("token expiry out of range".into()))?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Decodes `token`, checking signature, expiry and kind.
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, AccessError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AccessError::InvalidToken(e.to_string()))?;
        if claims.kind != kind {
            return Err(AccessError::InvalidToken("wrong token kind".into()));
        }
        Ok(claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: UserId(3),
            name: "Ann".into(),
            surname: "Lee".into(),
            email: "ann@example.com".into(),
            role: Role::Seller,
            phone: None,
        }
    }

    fn service() -> TokenService {
        TokenService::new(b"test-secret", Duration::hours(24), Duration::days(7))
    }

    #[test]
    fn test_access_token_round_trip() {
        let tokens = service();
        let issued = tokens.issue(&user(), TokenKind::Access).unwrap();
        let claims = tokens.verify(&issued.token, TokenKind::Access).unwrap();

        assert_eq!(claims.sub, "3");
        assert_eq!(claims.role, Role::Seller);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert_eq!(claims.identity().user_id, UserId(3));
        assert_eq!(issued.expires_at.timestamp(), claims.exp);
    }

    #[test]
    fn test_kinds_are_not_interchangeable() {
        let tokens = service();
        let refresh = tokens.issue(&user(), TokenKind::Refresh).unwrap();
        assert!(matches!(
            tokens.verify(&refresh.token, TokenKind::Access),
            Err(AccessError::InvalidToken(_))
        ));
        let claims = tokens.verify(&refresh.token, TokenKind::Refresh).unwrap();
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_foreign_and_expired_tokens_are_rejected() {
        let other = TokenService::new(b"other-secret", Duration::hours(1), Duration::hours(1));
        let foreign = other.issue(&user(), TokenKind::Access).unwrap();
        assert!(service().verify(&foreign.token, TokenKind::Access).is_err());

        let stale = TokenService::new(b"test-secret", Duration::hours(-1), Duration::hours(-1));
        let expired = stale.issue(&user(), TokenKind::Access).unwrap();
        assert!(service().verify(&expired.token, TokenKind::Access).is_err());

        assert!(service().verify("not.a.token", TokenKind::Access).is_err());
    }
}
