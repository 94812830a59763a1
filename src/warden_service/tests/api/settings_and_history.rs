use warden_core::{SecuritySettings, SecuritySettingsUpdate};

use crate::helpers::{password, register_jane, test_app, username, JANE_PASSWORD};

#[tokio::test]
async fn never_configured_user_sees_the_documented_defaults() {
    let app = test_app();
    let user_id = register_jane(&app).await;

    let settings = app.service.security_settings(user_id).await.unwrap();
    assert_eq!(settings, SecuritySettings::default());
    assert!(settings.two_factor_enabled);
    assert!(settings.trusted_devices.is_empty());
    assert_eq!(settings.session_timeout_minutes, 30);
    assert!(settings.login_notifications);
}

#[tokio::test]
async fn partial_update_merges_without_discarding_other_fields() {
    let app = test_app();
    let user_id = register_jane(&app).await;

    app.service
        .update_security_settings(
            user_id,
            SecuritySettingsUpdate {
                login_notifications: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    app.service
        .update_security_settings(
            user_id,
            SecuritySettingsUpdate {
                trusted_devices: Some(vec!["dorm-laptop".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let settings = app.service.security_settings(user_id).await.unwrap();
    assert!(!settings.login_notifications, "explicitly disabled");
    assert_eq!(settings.trusted_devices, vec!["dorm-laptop".to_string()]);
    assert!(settings.two_factor_enabled, "untouched field keeps default");
    assert_eq!(settings.session_timeout_minutes, 30);
}

#[tokio::test]
async fn settings_are_scoped_per_user() {
    let app = test_app();
    let jane = register_jane(&app).await;
    let other = app
        .service
        .register(
            username("asmith"),
            warden_core::EmailAddress::try_from("asmith@university.edu").unwrap(),
            warden_core::PhoneNumber::try_from("+1 555 222 3333").unwrap(),
            password("An0therPass"),
        )
        .await
        .unwrap();

    app.service
        .update_security_settings(
            jane,
            SecuritySettingsUpdate {
                two_factor_enabled: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!app
        .service
        .security_settings(jane)
        .await
        .unwrap()
        .two_factor_enabled);
    assert!(app
        .service
        .security_settings(other)
        .await
        .unwrap()
        .two_factor_enabled);
}

#[tokio::test]
async fn history_interleaves_failures_and_successes_in_order() {
    let app = test_app();
    let user_id = register_jane(&app).await;

    let _ = app
        .service
        .login(&username("jdoe"), &password("Wrongpass1"), None)
        .await;
    app.service
        .login(&username("jdoe"), &password(JANE_PASSWORD), None)
        .await
        .unwrap();

    let history = app.service.login_history(user_id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(!history[0].success);
    assert!(history[1].success);
}
