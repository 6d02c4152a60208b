//! Admin export: secret gating, full-record output, and its deliberate
//! blindness to expiry.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use domains::{MessageRepo, NewMessage};
use integration_tests::{get, test_app, StubClassifier, TEST_ADMIN_SECRET};

#[tokio::test]
async fn wrong_or_missing_secret_is_forbidden_and_silent() {
    let app = test_app(StubClassifier::clean()).await;
    let now = Utc::now();
    app.repo
        .insert(NewMessage {
            text: "secret stuff".to_string(),
            sender_name: "bob".to_string(),
            sender_ip: "1.2.3.4".to_string(),
            created_at: now,
            expires_at: now + Duration::hours(10),
        })
        .await
        .unwrap();

    for path in ["/admin/export", "/admin/export?secret=guess"] {
        let (status, body) = get(&app.router, path).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, serde_json::Value::Null, "denial must leak nothing");
    }
}

#[tokio::test]
async fn export_returns_every_field_including_stale_rows() {
    let app = test_app(StubClassifier::clean()).await;
    let now = Utc::now();
    let stale_created = now - Duration::hours(11);
    app.repo
        .insert(NewMessage {
            text: "stale".to_string(),
            sender_name: "alice".to_string(),
            sender_ip: "1.1.1.1".to_string(),
            created_at: stale_created,
            expires_at: stale_created + Duration::hours(10),
        })
        .await
        .unwrap();
    app.repo
        .insert(NewMessage {
            text: "fresh".to_string(),
            sender_name: "bob".to_string(),
            sender_ip: "2.2.2.2".to_string(),
            created_at: now,
            expires_at: now + Duration::hours(10),
        })
        .await
        .unwrap();

    let (status, body) =
        get(&app.router, &format!("/admin/export?secret={TEST_ADMIN_SECRET}")).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2, "stale rows are part of the export");

    // Newest first, all fields present, origin address included.
    assert_eq!(rows[0]["text"], "fresh");
    assert_eq!(rows[0]["sender_name"], "bob");
    assert_eq!(rows[0]["sender_ip"], "2.2.2.2");
    assert!(rows[0]["id"].is_string());
    assert!(rows[0]["created_at"].is_string());
    assert!(rows[0]["expires_at"].is_string());
    assert_eq!(rows[1]["text"], "stale");

    // Export must not purge as a side effect.
    assert_eq!(app.repo.export_all().await.unwrap().len(), 2);
}
