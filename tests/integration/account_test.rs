//! Registration, login, and session lifecycle over HTTP.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_register_creates_unverified_user_with_session() {
    let app = TestApp::new().await;

    let (token, user_id) = app.register("maria", "hunter22", "maria@example.com").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    let user = response.data();
    assert_eq!(user["id"], user_id.as_str());
    assert_eq!(user["username"], "maria");
    assert_eq!(user["role"], "USER");
    assert_eq!(user["has_pending_update"], false);

    // Default preferences with the registration email staged unverified.
    let prefs = &user["preferences"];
    assert_eq!(prefs["email"], "maria@example.com");
    assert_eq!(prefs["email_verified"], false);
    assert_eq!(prefs["notifications_enabled"], true);
    assert_eq!(prefs["min_severity"], "High");
    assert_eq!(prefs["subscribed_types"].as_array().unwrap().len(), 4);

    // The activation email went out to the new address.
    let sent = app.sender.sent().await;
    let activation = sent.last().unwrap();
    assert_eq!(activation.to, "maria@example.com");
    assert!(activation.body.contains(&format!("verify_user={user_id}")));
}

#[tokio::test]
async fn test_register_without_solved_challenge_is_rejected() {
    let app = TestApp::new().await;

    // An id the server never issued.
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "maria",
                "password": "hunter22",
                "confirm_password": "hunter22",
                "email": "maria@example.com",
                "challenge_id": uuid::Uuid::new_v4().to_string(),
                "challenge_answer": 7,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Human verification not passed");

    // A real challenge with a wrong sum fares no better.
    let (challenge_id, answer) = app.solve_challenge().await;
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "maria",
                "password": "hunter22",
                "confirm_password": "hunter22",
                "email": "maria@example.com",
                "challenge_id": challenge_id,
                "challenge_answer": answer + 1000,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // No account was created either way.
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
async fn test_register_rejects_taken_username() {
    let app = TestApp::new().await;
    app.register("maria", "hunter22", "maria@example.com").await;

    let (challenge_id, answer) = app.solve_challenge().await;
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "maria",
                "password": "other-pass",
                "confirm_password": "other-pass",
                "email": "other@example.com",
                "challenge_id": challenge_id,
                "challenge_answer": answer,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_password_mismatch() {
    let app = TestApp::new().await;

    let (challenge_id, answer) = app.solve_challenge().await;
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "maria",
                "password": "hunter22",
                "confirm_password": "hunter23",
                "email": "maria@example.com",
                "challenge_id": challenge_id,
                "challenge_answer": answer,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let app = TestApp::new().await;

    let (challenge_id, answer) = app.solve_challenge().await;
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "maria",
                "password": "hunter22",
                "confirm_password": "hunter22",
                "email": "not-an-email",
                "challenge_id": challenge_id,
                "challenge_answer": answer,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_share_one_generic_message() {
    let app = TestApp::new().await;
    app.register("maria", "hunter22", "maria@example.com").await;

    let wrong_pass = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "maria", "password": "wrong"})),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "nobody", "password": "hunter22"})),
            None,
        )
        .await;

    assert_eq!(wrong_pass.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pass.body["message"], "Invalid credentials");
    assert_eq!(unknown_user.body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_me_requires_a_valid_session() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-real-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_invalidates_the_session() {
    let app = TestApp::new().await;
    let (token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_resend_verification_only_while_unverified() {
    let app = TestApp::new().await;
    let (token, user_id) = app.register("maria", "hunter22", "maria@example.com").await;
    assert_eq!(app.sender.count().await, 1);

    let response = app
        .request("POST", "/api/auth/resend-verification", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.sender.count().await, 2);

    app.verify_email(&user_id).await;
    let response = app
        .request("POST", "/api/auth/resend-verification", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
