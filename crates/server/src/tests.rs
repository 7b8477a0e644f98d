// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use super::*;
use axum::body::Body;
use axum::http::Request;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    let persistence: Persistence = Persistence::new_in_memory().unwrap();
    build_router(AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        rules: Arc::new(PremiumRules::default()),
        time_zone: chrono_tz::America::Sao_Paulo,
    })
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    staff_id: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(staff_id) = staff_id {
        builder = builder.header(session::STAFF_ID_HEADER, staff_id);
    }
    builder = builder.header(REQUEST_ID_HEADER, "req-test");

    let request: Request<Body> = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response: Response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// Bootstraps `ana` as master and adds `bia` as regular staff.
async fn seeded_app() -> Router {
    let app: Router = test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/staff",
        None,
        Some(json!({"staff_id": "ana", "display_name": "Ana Souza"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/staff",
        Some("ana"),
        Some(json!({"staff_id": "bia", "display_name": "Bia Lima"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    app
}

fn registration(responsible: &str, date: &str, quantity: u32) -> Value {
    json!({
        "entry_type": "trademark_registration",
        "client_name": "Acme Ltda",
        "brand_name": "Acme",
        "responsible_user_id": responsible,
        "entry_date": date,
        "brand_quantity": quantity,
        "payment_type": "cash"
    })
}

#[tokio::test]
async fn test_health() {
    let app: Router = test_app();
    let (status, body) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_anonymous_staff_creation_only_while_directory_empty() {
    let app: Router = seeded_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/staff",
        None,
        Some(json!({"staff_id": "caio", "display_name": "Caio"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "authentication_failed");
}

#[tokio::test]
async fn test_unknown_staff_header_rejected() {
    let app: Router = seeded_app().await;
    let (status, body) = send(&app, "GET", "/entries", Some("nobody"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "authentication_failed");
}

#[tokio::test]
async fn test_missing_staff_header_rejected() {
    let app: Router = seeded_app().await;
    let (status, _) = send(&app, "GET", "/premiums", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_staff_cannot_create_staff() {
    let app: Router = seeded_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/staff",
        Some("bia"),
        Some(json!({"staff_id": "caio", "display_name": "Caio"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_list_staff() {
    let app: Router = seeded_app().await;
    let (status, body) = send(&app, "GET", "/staff", Some("bia"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["staff"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_entry_for_self() {
    let app: Router = seeded_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/entries",
        Some("bia"),
        Some(registration("bia", "2026-03-10", 3)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["entry"]["responsible_user_id"], "bia");
    assert!(body["entry"]["entry_id"].as_i64().is_some());
}

#[tokio::test]
async fn test_staff_cannot_credit_someone_else() {
    let app: Router = seeded_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/entries",
        Some("bia"),
        Some(registration("ana", "2026-03-10", 3)),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_invalid_date_is_bad_request() {
    let app: Router = seeded_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/entries",
        Some("bia"),
        Some(registration("bia", "10/03/2026", 3)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn test_zero_quantity_is_bad_request() {
    let app: Router = seeded_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/entries",
        Some("bia"),
        Some(registration("bia", "2026-03-10", 0)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn test_unstorable_quantity_is_bad_request() {
    let app: Router = seeded_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/entries",
        Some("bia"),
        Some(registration("bia", "2026-03-10", 3_000_000_000)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn test_duplicate_staff_is_rule_violation() {
    let app: Router = seeded_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/staff",
        Some("ana"),
        Some(json!({"staff_id": "bia", "display_name": "Outra Bia"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "domain_rule_violation");
}

#[tokio::test]
async fn test_update_missing_entry_not_found() {
    let app: Router = seeded_app().await;
    let (status, body) = send(
        &app,
        "PUT",
        "/entries/999",
        Some("ana"),
        Some(registration("bia", "2026-03-10", 3)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_premium_report_for_month() {
    let app: Router = seeded_app().await;
    send(
        &app,
        "POST",
        "/entries",
        Some("bia"),
        Some(registration("bia", "2026-03-10", 3)),
    )
    .await;
    send(
        &app,
        "POST",
        "/entries",
        Some("ana"),
        Some(registration("ana", "2026-02-10", 5)),
    )
    .await;

    let (status, body) = send(
        &app,
        "GET",
        "/premiums?year=2026&month=3",
        Some("ana"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period_start"], "2026-03-01");
    assert_eq!(body["summary"]["total_registration_units"], 3);
    assert_eq!(body["staff"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_staff_report_is_scoped_to_self() {
    let app: Router = seeded_app().await;
    send(
        &app,
        "POST",
        "/entries",
        Some("ana"),
        Some(registration("ana", "2026-03-10", 5)),
    )
    .await;

    let (status, body) = send(
        &app,
        "GET",
        "/premiums?year=2026&month=3&user=all",
        Some("bia"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_filter"], "bia");
    assert_eq!(body["summary"]["total_registration_units"], 0);
}

#[tokio::test]
async fn test_half_period_query_is_bad_request() {
    let app: Router = seeded_app().await;
    let (status, body) = send(&app, "GET", "/premiums?year=2026", Some("ana"), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn test_csv_export() {
    let app: Router = seeded_app().await;
    let request: Request<Body> = Request::builder()
        .method("GET")
        .uri("/premiums/export.csv?year=2026&month=3")
        .header(session::STAFF_ID_HEADER, "ana")
        .body(Body::empty())
        .unwrap();

    let response: Response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text: String = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().any(|line| line.starts_with("bia,Bia Lima,")));
}

#[tokio::test]
async fn test_delete_requires_master() {
    let app: Router = seeded_app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/entries",
        Some("bia"),
        Some(registration("bia", "2026-03-10", 3)),
    )
    .await;
    let entry_id: i64 = created["entry"]["entry_id"].as_i64().unwrap();
    let uri: String = format!("/entries/{entry_id}");

    let (status, _) = send(&app, "DELETE", &uri, Some("bia"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, "DELETE", &uri, Some("ana"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "DELETE", &uri, Some("ana"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_audit_timeline_records_request_id() {
    let app: Router = seeded_app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/entries",
        Some("bia"),
        Some(registration("bia", "2026-03-10", 3)),
    )
    .await;
    let entry_id: i64 = created["entry"]["entry_id"].as_i64().unwrap();
    let uri: String = format!("/audit/timeline?entry_id={entry_id}");

    let (status, _) = send(&app, "GET", &uri, Some("bia"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, "GET", &uri, Some("ana"), None).await;
    assert_eq!(status, StatusCode::OK);

    let events: &Vec<Value> = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["cause_id"], "req-test");
    assert_eq!(events[0]["actor_id"], "bia");
}

#[tokio::test]
async fn test_disabled_staff_cannot_authenticate() {
    let app: Router = seeded_app().await;

    let (status, _) = send(
        &app,
        "PUT",
        "/staff/bia/disabled",
        Some("ana"),
        Some(json!({"disabled": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/entries", Some("bia"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "PUT",
        "/staff/bia/disabled",
        Some("ana"),
        Some(json!({"disabled": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/entries", Some("bia"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_master_cannot_disable_self() {
    let app: Router = seeded_app().await;
    let (status, _) = send(
        &app,
        "PUT",
        "/staff/ana/disabled",
        Some("ana"),
        Some(json!({"disabled": true})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[test]
fn test_request_cause_defaults_without_header() {
    let headers: HeaderMap = HeaderMap::new();
    let cause: Cause = request_cause(&headers, "Create entry");

    assert_eq!(cause.id, "http-request");
    assert_eq!(cause.description, "Create entry");
}
