//! The arithmetic human-verification gate over HTTP.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_issue_returns_operands_within_bounds() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/challenge", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert!(data["id"].as_str().is_some());
    // Default operand range.
    assert!((1..=10).contains(&data["a"].as_u64().unwrap()));
    assert!((1..=10).contains(&data["b"].as_u64().unwrap()));
    // The expected sum never leaves the server.
    assert!(data.get("answer").is_none());
}

#[tokio::test]
async fn test_refresh_keeps_the_id() {
    let app = TestApp::new().await;
    let (id, _) = app.solve_challenge().await;

    let response = app
        .request("POST", &format!("/api/challenge/{id}/refresh"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], id.as_str());

    let response = app
        .request(
            "POST",
            &format!("/api/challenge/{}/refresh", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_answer_regenerates_the_pair() {
    let app = TestApp::new().await;
    let (id, _) = app.solve_challenge().await;

    // A sum no operand pair can produce.
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "maria",
                "password": "hunter22",
                "confirm_password": "hunter22",
                "email": "maria@example.com",
                "challenge_id": id,
                "challenge_answer": 1000,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // The same id still works after fetching the regenerated pair.
    let response = app
        .request("POST", &format!("/api/challenge/{id}/refresh"), None, None)
        .await;
    let fresh = response.data();
    let answer = fresh["a"].as_u64().unwrap() + fresh["b"].as_u64().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "maria",
                "password": "hunter22",
                "confirm_password": "hunter22",
                "email": "maria@example.com",
                "challenge_id": id,
                "challenge_answer": answer,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_solved_challenge_is_single_use() {
    let app = TestApp::new().await;
    let (id, answer) = app.solve_challenge().await;

    let first = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "maria",
                "password": "hunter22",
                "confirm_password": "hunter22",
                "email": "maria@example.com",
                "challenge_id": id,
                "challenge_answer": answer,
            })),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    // Replaying the consumed challenge for a second account fails.
    let replay = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "jose",
                "password": "hunter22",
                "confirm_password": "hunter22",
                "email": "jose@example.com",
                "challenge_id": id,
                "challenge_answer": answer,
            })),
            None,
        )
        .await;
    assert_eq!(replay.status, StatusCode::BAD_REQUEST);
    assert_eq!(replay.body["message"], "Human verification not passed");
}

#[tokio::test]
async fn test_each_gated_operation_needs_its_own_challenge() {
    let app = TestApp::new().await;
    let (token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    // The registration challenge is gone; a profile change needs a new one.
    let (id, answer) = app.solve_challenge().await;
    let response = app
        .request(
            "PUT",
            "/api/users/me/profile",
            Some(json!({
                "new_email": "new@example.com",
                "challenge_id": id,
                "challenge_answer": answer,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["pending"], true);
}
