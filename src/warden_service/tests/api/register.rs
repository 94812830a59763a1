use secrecy::ExposeSecret;
use warden_application::RegisterError;
use warden_core::{Clock, EmailAddress, PhoneNumber, UserStoreError};

use crate::helpers::{password, register_jane, test_app, username, JANE_PASSWORD};

#[tokio::test]
async fn registered_user_is_retrievable_with_matching_fields() {
    let app = test_app();
    let user_id = register_jane(&app).await;

    let user = app.service.get_user(user_id).await.unwrap();
    assert_eq!(user.id(), user_id);
    assert_eq!(user.username().as_ref(), "jdoe");
    assert_eq!(user.email().as_ref(), "jdoe@university.edu");
    assert_eq!(user.phone().as_ref(), "+1 555 000 1111");
    assert_eq!(user.created_at(), app.clock.now());
}

#[tokio::test]
async fn password_is_stored_only_as_a_hash() {
    let app = test_app();
    let user_id = register_jane(&app).await;

    let user = app.service.get_user(user_id).await.unwrap();
    let digest = user.password_digest().as_ref().expose_secret();
    assert_ne!(digest, JANE_PASSWORD);
    assert!(digest.starts_with("$argon2id$"));
}

#[tokio::test]
async fn unknown_user_id_is_not_found() {
    let app = test_app();
    let result = app.service.get_user(warden_core::UserId::new()).await;
    assert_eq!(result.unwrap_err(), UserStoreError::UserNotFound);
}

#[tokio::test]
async fn any_colliding_identity_field_rejects_registration() {
    let app = test_app();
    register_jane(&app).await;

    let collisions = [
        ("jdoe", "fresh@university.edu", "+1 555 111 2222"),
        ("fresh", "jdoe@university.edu", "+1 555 111 3333"),
        ("fresher", "fresher@university.edu", "+1 555 000 1111"),
    ];

    for (name, email, phone) in collisions {
        let result = app
            .service
            .register(
                username(name),
                EmailAddress::try_from(email).unwrap(),
                PhoneNumber::try_from(phone).unwrap(),
                password(JANE_PASSWORD),
            )
            .await;
        assert!(
            matches!(
                result,
                Err(RegisterError::UserStoreError(UserStoreError::IdentityTaken))
            ),
            "collision on ({name}, {email}, {phone}) should be rejected"
        );
    }
}

#[tokio::test]
async fn distinct_identities_register_independently() {
    let app = test_app();
    let jane = register_jane(&app).await;

    let other = app
        .service
        .register(
            username("asmith"),
            EmailAddress::try_from("asmith@university.edu").unwrap(),
            PhoneNumber::try_from("+1 555 222 3333").unwrap(),
            password("An0therPass"),
        )
        .await
        .unwrap();

    assert_ne!(jane, other);
}
