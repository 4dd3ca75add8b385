//! End-to-end alert scans driven through the admin endpoint.
//!
//! The bootstrap admin is itself an eligible recipient (verified email,
//! default subscriptions), so assertions pick out per-user entries from
//! the scan summary rather than global totals.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use alerthub_entity::event::{DisasterType, SeverityLevel};
use helpers::{TestApp, make_event};

/// The fired titles for one user, or None when nothing fired for them.
fn fired_titles<'a>(summary: &'a Value, username: &str) -> Option<&'a Value> {
    summary["fired"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["username"] == username)
        .map(|entry| &entry["titles"])
}

#[tokio::test]
async fn test_scan_matches_subscriptions_and_severity() {
    let app = TestApp::with_events(vec![
        make_event(
            "eq-1",
            "Mindanao Earthquake",
            DisasterType::Earthquake,
            SeverityLevel::Critical,
            7.1,
            125.6,
        ),
        make_event(
            "fl-1",
            "Marikina River Flooding",
            DisasterType::Flood,
            SeverityLevel::High,
            14.6,
            121.1,
        ),
    ])
    .await;

    let (token, user_id) = app.register("maria", "hunter22", "maria@example.com").await;
    app.verify_email(&user_id).await;
    // Earthquakes only; the flood must not reach maria.
    let response = app
        .request(
            "PUT",
            "/api/users/me/preferences",
            Some(json!({"subscribed_types": ["Earthquake"]})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let admin = app.admin_token().await;
    let response = app.request("POST", "/api/admin/scan", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    let summary = response.data();

    assert_eq!(summary["users_scanned"], 2);
    assert_eq!(
        fired_titles(summary, "maria"),
        Some(&json!(["Mindanao Earthquake"]))
    );
    // The admin's default subscriptions cover both hazard types.
    assert_eq!(
        fired_titles(summary, "admin").unwrap().as_array().unwrap().len(),
        2
    );

    let to_maria: Vec<_> = app
        .sender
        .sent()
        .await
        .into_iter()
        .filter(|message| message.to == "maria@example.com" && message.subject.contains("ALERT"))
        .collect();
    assert_eq!(to_maria.len(), 1);
    assert!(to_maria[0].subject.contains("Mindanao Earthquake"));
}

#[tokio::test]
async fn test_second_scan_sends_nothing_new() {
    let app = TestApp::with_events(vec![make_event(
        "eq-1",
        "Mindanao Earthquake",
        DisasterType::Earthquake,
        SeverityLevel::Critical,
        7.1,
        125.6,
    )])
    .await;

    let (_, user_id) = app.register("maria", "hunter22", "maria@example.com").await;
    app.verify_email(&user_id).await;

    let admin = app.admin_token().await;
    let first = app.request("POST", "/api/admin/scan", None, Some(&admin)).await;
    assert!(first.data()["alerts_sent"].as_u64().unwrap() > 0);

    // Every event is now in each user's ledger.
    let second = app.request("POST", "/api/admin/scan", None, Some(&admin)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.data()["alerts_sent"], 0);
    assert_eq!(second.data()["fired"], json!([]));
}

#[tokio::test]
async fn test_watch_zone_overrides_both_filters() {
    // Low severity and a type nobody subscribes to by default.
    let app = TestApp::with_events(vec![make_event(
        "wf-1",
        "Grass Fire Near Tagaytay",
        DisasterType::Wildfire,
        SeverityLevel::Low,
        14.1,
        121.0,
    )])
    .await;

    let (token, user_id) = app.register("maria", "hunter22", "maria@example.com").await;
    app.verify_email(&user_id).await;
    let response = app
        .request(
            "PUT",
            "/api/users/me/preferences",
            Some(json!({
                "min_severity": "Critical",
                "subscribed_types": [],
                "watch_zones": [{
                    "name": "Home",
                    "coordinates": [
                        {"lat": 13.0, "lng": 120.0},
                        {"lat": 15.0, "lng": 120.0},
                        {"lat": 15.0, "lng": 122.0},
                        {"lat": 13.0, "lng": 122.0},
                    ],
                }],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let admin = app.admin_token().await;
    let summary_response = app.request("POST", "/api/admin/scan", None, Some(&admin)).await;
    let summary = summary_response.data();

    // Only the zone fired; the admin's criteria don't cover a Low wildfire.
    assert_eq!(
        fired_titles(summary, "maria"),
        Some(&json!(["Grass Fire Near Tagaytay"]))
    );
    assert!(fired_titles(summary, "admin").is_none());

    let sent = app.sender.sent().await;
    let alert = sent
        .iter()
        .find(|message| message.to == "maria@example.com" && message.subject.contains("ALERT"))
        .unwrap();
    assert!(alert.body.contains("Triggered by Watch Zone: Home"));
}

#[tokio::test]
async fn test_unverified_users_are_skipped() {
    let app = TestApp::with_events(vec![make_event(
        "eq-1",
        "Mindanao Earthquake",
        DisasterType::Earthquake,
        SeverityLevel::Critical,
        7.1,
        125.6,
    )])
    .await;

    // Registered but never followed the activation link.
    app.register("maria", "hunter22", "maria@example.com").await;

    let admin = app.admin_token().await;
    let response = app.request("POST", "/api/admin/scan", None, Some(&admin)).await;
    let summary = response.data();

    // Only the admin was eligible.
    assert_eq!(summary["users_scanned"], 1);
    assert!(fired_titles(summary, "maria").is_none());
    assert!(
        !app.sender
            .sent()
            .await
            .iter()
            .any(|m| m.to == "maria@example.com" && m.subject.contains("ALERT"))
    );
}

#[tokio::test]
async fn test_notifications_toggle_silences_a_user() {
    let app = TestApp::with_events(vec![make_event(
        "eq-1",
        "Mindanao Earthquake",
        DisasterType::Earthquake,
        SeverityLevel::Critical,
        7.1,
        125.6,
    )])
    .await;

    let (token, user_id) = app.register("maria", "hunter22", "maria@example.com").await;
    app.verify_email(&user_id).await;
    app.request(
        "PUT",
        "/api/users/me/preferences",
        Some(json!({"notifications_enabled": false})),
        Some(&token),
    )
    .await;

    let admin = app.admin_token().await;
    let response = app.request("POST", "/api/admin/scan", None, Some(&admin)).await;
    let summary = response.data();

    assert_eq!(summary["users_scanned"], 1);
    assert!(fired_titles(summary, "maria").is_none());
}
