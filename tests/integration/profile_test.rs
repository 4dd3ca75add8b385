//! Preference updates, the two-phase sensitive-update protocol, and the
//! guest alert-config cache.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

/// Stage a sensitive profile change with a freshly solved challenge.
async fn stage_profile_change(
    app: &TestApp,
    token: &str,
    body: serde_json::Value,
) -> helpers::TestResponse {
    let (challenge_id, answer) = app.solve_challenge().await;
    let mut body = body;
    body["challenge_id"] = json!(challenge_id);
    body["challenge_answer"] = json!(answer);
    app.request("PUT", "/api/users/me/profile", Some(body), Some(token))
        .await
}

#[tokio::test]
async fn test_preference_updates_apply_immediately() {
    let app = TestApp::new().await;
    let (token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me/preferences",
            Some(json!({
                "min_severity": "Critical",
                "subscribed_types": ["Earthquake", "Severe Storm"],
                "notifications_enabled": false,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let user = response.data();
    assert_eq!(user["preferences"]["min_severity"], "Critical");
    assert_eq!(user["preferences"]["notifications_enabled"], false);
    // Nothing was staged; this is the non-sensitive path.
    assert_eq!(user["has_pending_update"], false);

    let response = app
        .request("GET", "/api/users/me/preferences", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let prefs = response.data();
    assert_eq!(
        prefs["subscribed_types"],
        json!(["Earthquake", "Severe Storm"])
    );
    // Untouched fields survive a partial update.
    assert_eq!(prefs["email"], "maria@example.com");
}

#[tokio::test]
async fn test_watch_zones_are_replaced_wholesale() {
    let app = TestApp::new().await;
    let (token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me/preferences",
            Some(json!({
                "watch_zones": [{
                    "name": "Manila Bay",
                    "coordinates": [
                        {"lat": 14.0, "lng": 120.0},
                        {"lat": 15.0, "lng": 120.0},
                        {"lat": 14.5, "lng": 121.0},
                    ],
                }],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let zones = response.data()["preferences"]["watch_zones"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0]["name"], "Manila Bay");
    let zone_id = zones[0]["id"].as_str().unwrap().to_string();

    // Submitting an empty list clears them.
    let response = app
        .request(
            "PUT",
            "/api/users/me/preferences",
            Some(json!({"watch_zones": []})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["preferences"]["watch_zones"], json!([]));
    assert!(!zone_id.is_empty());
}

#[tokio::test]
async fn test_email_change_is_staged_until_confirmed() {
    let app = TestApp::new().await;
    let (token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    let response =
        stage_profile_change(&app, &token, json!({"new_email": "new@example.com"})).await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["pending"], true);
    assert!(
        data["message"]
            .as_str()
            .unwrap()
            .contains("new@example.com")
    );
    // The live record still carries the old address.
    assert_eq!(data["user"]["preferences"]["email"], "maria@example.com");
    assert_eq!(data["user"]["has_pending_update"], true);

    // The confirmation link went to the NEW address.
    let sent = app.sender.sent().await;
    let confirmation = sent.last().unwrap();
    assert_eq!(confirmation.to, "new@example.com");
    assert!(confirmation.body.contains("confirm_update="));

    // Following the link applies the change and auto-verifies the address.
    let confirm_token = app.last_confirmation_token().await;
    let response = app
        .request(
            "GET",
            &format!("/api/confirm?confirm_update={confirm_token}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["confirmed_update"], true);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    let user = response.data();
    assert_eq!(user["preferences"]["email"], "new@example.com");
    assert_eq!(user["preferences"]["email_verified"], true);
    assert_eq!(user["has_pending_update"], false);

    // The token was consumed with the pending record.
    let response = app
        .request(
            "GET",
            &format!("/api/confirm?confirm_update={confirm_token}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["confirmed_update"], false);
}

#[tokio::test]
async fn test_password_change_waits_for_the_link() {
    let app = TestApp::new().await;
    let (token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    let response = stage_profile_change(
        &app,
        &token,
        json!({"new_password": "newpass99", "confirm_password": "newpass99"}),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["pending"], true);

    // Still the old password until the link is followed.
    app.login("maria", "hunter22").await;

    let confirm_token = app.last_confirmation_token().await;
    let response = app
        .request(
            "GET",
            &format!("/api/confirm?confirm_update={confirm_token}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.data()["confirmed_update"], true);

    app.login("maria", "newpass99").await;
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "maria", "password": "hunter22"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sensitive_change_requires_the_challenge() {
    let app = TestApp::new().await;
    let (token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me/profile",
            Some(json!({"new_email": "new@example.com"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Human verification not passed");

    // Nothing was staged.
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.data()["has_pending_update"], false);
}

#[tokio::test]
async fn test_password_mismatch_stages_nothing() {
    let app = TestApp::new().await;
    let (token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    let response = stage_profile_change(
        &app,
        &token,
        json!({"new_password": "newpass99", "confirm_password": "different"}),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.data()["has_pending_update"], false);
}

#[tokio::test]
async fn test_unknown_confirmation_token_is_a_quiet_noop() {
    let app = TestApp::new().await;
    app.register("maria", "hunter22", "maria@example.com").await;

    let response = app
        .request(
            "GET",
            &format!("/api/confirm?confirm_update={}", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["confirmed_update"], false);
}

#[tokio::test]
async fn test_activation_link_is_idempotent() {
    let app = TestApp::new().await;
    let (_, user_id) = app.register("maria", "hunter22", "maria@example.com").await;

    app.verify_email(&user_id).await;
    app.verify_email(&user_id).await;

    // An unknown id reports false, never an error page.
    let response = app
        .request(
            "GET",
            &format!("/api/confirm?verify_user={}", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["verified_user"], false);
}

#[tokio::test]
async fn test_guest_alert_config_roundtrip() {
    let app = TestApp::new().await;

    // Defaults before anyone has saved anything.
    let response = app.request("GET", "/api/alert-config", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["enabled"], true);
    assert_eq!(response.data()["email"], "");

    let config = json!({
        "email": "guest@example.com",
        "enabled": false,
        "min_severity": "Moderate",
        "subscribed_types": ["Flood"],
        "watch_zones": [],
    });
    let response = app
        .request("PUT", "/api/alert-config", Some(config.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/alert-config", None, None).await;
    assert_eq!(response.data()["email"], "guest@example.com");
    assert_eq!(response.data()["min_severity"], "Moderate");
    assert_eq!(response.data()["subscribed_types"], json!(["Flood"]));
}
