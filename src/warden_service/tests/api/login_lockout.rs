use chrono::Duration;
use warden_application::LoginError;
use warden_core::DeviceInfo;

use crate::helpers::{password, register_jane, test_app, username, JANE_PASSWORD};

#[tokio::test]
async fn correct_credentials_return_the_user_id() {
    let app = test_app();
    let user_id = register_jane(&app).await;

    let logged_in = app
        .service
        .login(&username("jdoe"), &password(JANE_PASSWORD), None)
        .await
        .unwrap();
    assert_eq!(logged_in, user_id);
}

#[tokio::test]
async fn wrong_password_and_unknown_username_read_identically() {
    let app = test_app();
    register_jane(&app).await;

    let wrong_password = app
        .service
        .login(&username("jdoe"), &password("Wrongpass1"), None)
        .await
        .unwrap_err();
    let unknown_user = app
        .service
        .login(&username("nobody"), &password(JANE_PASSWORD), None)
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, LoginError::InvalidCredentials));
    assert!(matches!(unknown_user, LoginError::InvalidCredentials));
    // identical message, so responses cannot be used to enumerate accounts
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn fifth_recent_failure_locks_the_account() {
    let app = test_app();
    register_jane(&app).await;

    for _ in 0..4 {
        let result = app
            .service
            .login(&username("jdoe"), &password("Wrongpass1"), None)
            .await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    let fifth = app
        .service
        .login(&username("jdoe"), &password("Wrongpass1"), None)
        .await
        .unwrap_err();
    assert!(fifth.is_locked());
}

#[tokio::test]
async fn locked_account_rejects_correct_password_and_skips_the_ledger() {
    let app = test_app();
    let user_id = register_jane(&app).await;

    for _ in 0..5 {
        let _ = app
            .service
            .login(&username("jdoe"), &password("Wrongpass1"), None)
            .await;
    }
    let entries_before = app.service.login_history(user_id).await.unwrap().len();

    let result = app
        .service
        .login(&username("jdoe"), &password(JANE_PASSWORD), None)
        .await
        .unwrap_err();

    assert!(matches!(result, LoginError::AccountLocked { .. }));
    assert_eq!(
        app.service.login_history(user_id).await.unwrap().len(),
        entries_before,
        "a lockout rejection leaves no trace in the ledger"
    );
}

#[tokio::test]
async fn lock_reports_remaining_minutes_rounded_up() {
    let app = test_app();
    register_jane(&app).await;

    for _ in 0..5 {
        let _ = app
            .service
            .login(&username("jdoe"), &password("Wrongpass1"), None)
            .await;
    }

    // 10 minutes into the 30-minute lock: 20 remain.
    app.clock.advance(Duration::minutes(10));
    let result = app
        .service
        .login(&username("jdoe"), &password(JANE_PASSWORD), None)
        .await
        .unwrap_err();
    assert!(matches!(
        result,
        LoginError::AccountLocked {
            remaining_minutes: 20
        }
    ));
}

#[tokio::test]
async fn expired_lock_lets_a_correct_login_through_and_clears_it() {
    let app = test_app();
    register_jane(&app).await;

    for _ in 0..5 {
        let _ = app
            .service
            .login(&username("jdoe"), &password("Wrongpass1"), None)
            .await;
    }

    app.clock.advance(Duration::minutes(31));

    app.service
        .login(&username("jdoe"), &password(JANE_PASSWORD), None)
        .await
        .unwrap();

    // the account now behaves like it was never locked
    let result = app
        .service
        .login(&username("jdoe"), &password("Wrongpass1"), None)
        .await
        .unwrap_err();
    assert!(matches!(result, LoginError::InvalidCredentials));
}

#[tokio::test]
async fn login_attempts_carry_device_metadata_into_history() {
    let app = test_app();
    let user_id = register_jane(&app).await;

    let device = DeviceInfo {
        ip_address: Some("198.51.100.20".to_string()),
        user_agent: Some("Mozilla/5.0 (X11; Linux x86_64)".to_string()),
    };
    app.service
        .login(&username("jdoe"), &password(JANE_PASSWORD), Some(device))
        .await
        .unwrap();

    let history = app.service.login_history(user_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].success);
    assert_eq!(history[0].ip_address.as_deref(), Some("198.51.100.20"));
    assert_eq!(
        history[0].user_agent.as_deref(),
        Some("Mozilla/5.0 (X11; Linux x86_64)")
    );
}

#[tokio::test]
async fn history_never_exceeds_ten_entries() {
    let app = test_app();
    let user_id = register_jane(&app).await;

    // Spread attempts out so no lockout interferes: a success clears
    // failures, and we alternate to keep the account unlocked.
    for _ in 0..12 {
        app.service
            .login(&username("jdoe"), &password(JANE_PASSWORD), None)
            .await
            .unwrap();
    }

    let history = app.service.login_history(user_id).await.unwrap();
    assert_eq!(history.len(), 10);
    assert!(history.iter().all(|attempt| attempt.success));
}
