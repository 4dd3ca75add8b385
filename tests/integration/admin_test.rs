//! Admin endpoints: user directory and the manual scan trigger.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_user_listing_is_admin_only() {
    let app = TestApp::new().await;
    let (user_token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    let response = app
        .request("GET", "/api/admin/users", None, Some(&user_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("GET", "/api/admin/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let admin = app.admin_token().await;
    let response = app.request("GET", "/api/admin/users", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);

    let users = response.data().as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u["username"] == "admin" && u["role"] == "ADMIN"));
    assert!(users.iter().any(|u| u["username"] == "maria" && u["role"] == "USER"));
    // No credential material in the listing.
    assert!(!response.body.to_string().contains("password"));
}

#[tokio::test]
async fn test_delete_user_revokes_their_sessions() {
    let app = TestApp::new().await;
    let (user_token, user_id) = app.register("maria", "hunter22", "maria@example.com").await;

    let admin = app.admin_token().await;
    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{user_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The account is gone and its session no longer resolves.
    let response = app
        .request("GET", "/api/auth/me", None, Some(&user_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/api/admin/users", None, Some(&admin)).await;
    let users = response.data().as_array().unwrap();
    assert!(!users.iter().any(|u| u["username"] == "maria"));
}

#[tokio::test]
async fn test_delete_is_admin_only() {
    let app = TestApp::new().await;
    let (user_token, _) = app.register("maria", "hunter22", "maria@example.com").await;
    let (_, other_id) = app.register("jose", "hunter22", "jose@example.com").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{other_id}"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let listing = app.request("GET", "/api/admin/users", None, Some(&admin)).await;
    let admin_id = listing
        .data()
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "admin")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{admin_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{}", uuid::Uuid::new_v4()),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_manual_scan_is_admin_only() {
    let app = TestApp::new().await;
    let (user_token, _) = app.register("maria", "hunter22", "maria@example.com").await;

    let response = app
        .request("POST", "/api/admin/scan", None, Some(&user_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let admin = app.admin_token().await;
    let response = app.request("POST", "/api/admin/scan", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    // Empty feed: the admin was evaluated, nothing fired.
    assert_eq!(response.data()["users_scanned"], 1);
    assert_eq!(response.data()["alerts_sent"], 0);
    assert_eq!(response.data()["fired"], json!([]));
}
