mod common;

use common::system;
use shop_gateway::ResourceClient;
use shop_server::access::{AccessError, AuthError};
use shop_server::model::{ChangePasswordRequest, LoginRequest, RegisterRequest, Role, UserUpdate};
use shop_server::users::UserError;

fn registration(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.into(),
        password: password.into(),
        name: "Ann".into(),
        surname: "Smith".into(),
        phone: Some("+100200300".into()),
    }
}

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn test_register_then_login() {
    let system = system().await;
    let auth = &system.auth_client;

    let registered = auth.register(registration("ann@example.com", "hunter22")).await.unwrap();
    assert_eq!(registered.user.role, Role::User);
    assert_ne!(registered.access_token, registered.refresh_token);

    let identity = auth.authenticate(&registered.access_token).unwrap();
    assert_eq!(identity.user_id, registered.user.id);
    assert_eq!(identity.role, Role::User);

    let logged_in = auth.login(login("ann@example.com", "hunter22")).await.unwrap();
    assert_eq!(logged_in.user, registered.user);

    // The stored hash is not the password.
    let credentials = system
        .user_client
        .credentials(registered.user.id)
        .await
        .unwrap()
        .unwrap();
    assert!(credentials.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let system = system().await;
    system
        .auth_client
        .register(registration("ann@example.com", "hunter22"))
        .await
        .unwrap();

    let wrong_password = system
        .auth_client
        .login(login("ann@example.com", "hunter23"))
        .await
        .unwrap_err();
    let unknown_email = system
        .auth_client
        .login(login("bob@example.com", "hunter22"))
        .await
        .unwrap_err();

    assert_eq!(wrong_password, AuthError::Access(AccessError::InvalidCredentials));
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_registration_is_validated() {
    let system = system().await;
    let auth = &system.auth_client;
    auth.register(registration("ann@example.com", "hunter22")).await.unwrap();

    let err = auth
        .register(registration("ann@example.com", "another1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::User(UserError::AlreadyExists(_))), "got {err:?}");

    let err = auth.register(registration("bob@example.com", "short")).await.unwrap_err();
    assert!(matches!(err, AuthError::User(UserError::ValidationError(_))));

    let err = auth.register(registration("not-an-email", "hunter22")).await.unwrap_err();
    assert!(matches!(err, AuthError::User(UserError::ValidationError(_))));

    assert_eq!(system.user_client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_refresh_issues_tokens_for_current_role() {
    let system = system().await;
    let auth = &system.auth_client;
    let registered = auth.register(registration("ann@example.com", "hunter22")).await.unwrap();

    // An access token is not accepted where a refresh token is expected.
    let err = auth.refresh(&registered.access_token).await.unwrap_err();
    assert!(matches!(err, AuthError::Access(AccessError::InvalidToken(_))));

    system
        .user_client
        .update_role(registered.user.id, Role::Seller)
        .await
        .unwrap();
    let refreshed = auth.refresh(&registered.refresh_token).await.unwrap();
    assert_eq!(refreshed.user.role, Role::Seller);
    assert_eq!(auth.authenticate(&refreshed.access_token).unwrap().role, Role::Seller);

    system.user_client.delete(registered.user.id).await.unwrap();
    let err = auth.refresh(&registered.refresh_token).await.unwrap_err();
    assert!(matches!(err, AuthError::Access(AccessError::InvalidToken(_))));
}

#[tokio::test]
async fn test_change_password() {
    let system = system().await;
    let auth = &system.auth_client;
    let user = auth
        .register(registration("ann@example.com", "hunter22"))
        .await
        .unwrap()
        .user;

    let err = auth
        .change_password(
            user.id,
            ChangePasswordRequest {
                old_password: "wrong-one".into(),
                new_password: "brand-new".into(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AuthError::User(UserError::ValidationError("old password is incorrect".into()))
    );

    auth.change_password(
        user.id,
        ChangePasswordRequest {
            old_password: "hunter22".into(),
            new_password: "brand-new".into(),
        },
    )
    .await
    .unwrap();

    assert!(auth.login(login("ann@example.com", "hunter22")).await.is_err());
    let logged_in = auth.login(login("ann@example.com", "brand-new")).await.unwrap();
    assert_eq!(logged_in.user.id, user.id);
    assert_eq!(auth.profile(user.id).await.unwrap().surname, "Smith");
}

#[tokio::test]
async fn test_admin_created_accounts_keep_their_role() {
    let system = system().await;
    let id = system
        .auth_client
        .create_account(
            "Sam".into(),
            "Seller".into(),
            "sam@example.com".into(),
            None,
            "counter1".into(),
            Role::Seller,
        )
        .await
        .unwrap();

    let user = system.user_client.user_by_email("sam@example.com").await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.role, Role::Seller);
    assert_eq!(user.phone, None);

    let err = system.user_client.user_by_email("nobody@example.com").await.unwrap_err();
    assert!(matches!(err, UserError::NotFound(_)));
}

#[tokio::test]
async fn test_profile_update_can_clear_phone() {
    let system = system().await;
    let registered = system
        .auth_client
        .register(registration("ann@example.com", "hunter22"))
        .await
        .unwrap();
    let id = registered.user.id;
    assert_eq!(registered.user.phone.as_deref(), Some("+100200300"));

    let renamed = UserUpdate {
        name: Some("Anna".into()),
        ..UserUpdate::default()
    };
    let user = system.user_client.update_user(id, renamed).await.unwrap();
    assert_eq!(user.name, "Anna");
    assert_eq!(user.phone.as_deref(), Some("+100200300"));

    let replaced = UserUpdate {
        phone: Some(Some("+999".into())),
        ..UserUpdate::default()
    };
    let user = system.user_client.update_user(id, replaced).await.unwrap();
    assert_eq!(user.phone.as_deref(), Some("+999"));

    let cleared = UserUpdate {
        phone: Some(None),
        ..UserUpdate::default()
    };
    let user = system.user_client.update_user(id, cleared).await.unwrap();
    assert_eq!(user.phone, None);
    assert_eq!(system.user_client.require(id).await.unwrap().phone, None);
}
