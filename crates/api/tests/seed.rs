mod common;

use assert_matches::assert_matches;
use recipebox_api::auth::credentials::CredentialService;
use recipebox_api::auth::password::verify_password;
use recipebox_api::error::AppError;
use recipebox_api::seed::{seed_users, SeedUser};
use recipebox_core::error::CoreError;
use recipebox_db::repositories::UserRepo;
use sqlx::PgPool;

fn seed(username: &str) -> SeedUser {
    SeedUser {
        username: username.to_string(),
        password: common::TEST_PASSWORD.to_string(),
    }
}

/// Seeding twice creates each user once and stores hashed passwords.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_users_is_repeatable(pool: PgPool) {
    let jwt = common::test_jwt_config();
    let credentials = CredentialService::new(&jwt);
    let users = [seed("Bassel"), seed("Omar"), seed("Walid")];

    assert_eq!(seed_users(&pool, &credentials, &users).await.unwrap(), 3);
    assert_eq!(seed_users(&pool, &credentials, &users).await.unwrap(), 0);

    let omar = UserRepo::find_by_username(&pool, "Omar")
        .await
        .unwrap()
        .expect("seeded user should exist");
    assert_ne!(omar.password_hash, common::TEST_PASSWORD);
    assert!(verify_password(common::TEST_PASSWORD, &omar.password_hash).unwrap());
}

/// Seeded users can log in through the credential service.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_user_can_authenticate(pool: PgPool) {
    let jwt = common::test_jwt_config();
    let credentials = CredentialService::new(&jwt);
    seed_users(&pool, &credentials, &[seed("Bassel")])
        .await
        .unwrap();

    let tokens = credentials
        .authenticate(&pool, "Bassel", common::TEST_PASSWORD)
        .await
        .unwrap();
    let claims = credentials.validate_token(&tokens.token).unwrap();
    assert_eq!(claims.sub, "Bassel");

    let err = credentials
        .authenticate(&pool, "Bassel", "wrong-password")
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Unauthorized(_)));
}
