// SPDX-License-Identifier: Apache-2.0

//! Write-path contract: validation before persistence, identifier echo,
//! the admission step machine, and the admin listing/patch pair.

mod support;

use elmwood_server::{AppState, MemoryStore, SqliteStore};
use serde_json::{json, Value};
use std::sync::Arc;
use support::{get, send_json, spawn_server};
use tempfile::tempdir;

async fn memory_server() -> std::net::SocketAddr {
    spawn_server(AppState::new(Arc::new(MemoryStore::new()))).await
}

fn inquiry_body() -> Value {
    json!({
        "name": "Asha Rane",
        "email": "asha@example.com",
        "phone": "+91 98200 11223",
        "message": "Looking for assisted living for my father.",
        "inquiryType": "general"
    })
}

#[tokio::test]
async fn valid_inquiry_persists_and_echoes_identity() {
    let addr = memory_server().await;
    let (status, body) = send_json(addr, "POST", "/api/leads/inquiry", &inquiry_body()).await;
    assert_eq!(status, 201);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["name"], "Asha Rane");
    assert_eq!(body["data"]["email"], "asha@example.com");

    let (status, _, listing) = get(addr, "/api/leads").await;
    assert_eq!(status, 200);
    let rows = listing["data"].as_array().expect("lead rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "new");
    assert_eq!(rows[0]["priority"], "medium");
    assert_eq!(rows[0]["source"], "contact_form");
    assert_eq!(listing["pagination"]["pages"], 1);
}

#[tokio::test]
async fn missing_email_fails_validation_with_no_partial_write() {
    let addr = memory_server().await;
    let mut body = inquiry_body();
    body["email"] = json!("");
    let (status, response) = send_json(addr, "POST", "/api/leads/inquiry", &body).await;
    assert_eq!(status, 400);
    assert_eq!(response["success"], Value::Bool(false));
    assert_eq!(response["message"], "Validation failed");
    let errors = response["errors"].as_array().expect("violations");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "email");

    let (_, _, listing) = get(addr, "/api/leads").await;
    assert!(listing["data"].as_array().expect("lead rows").is_empty());
}

#[tokio::test]
async fn appointment_submission_is_high_priority_and_echoes_schedule() {
    let addr = memory_server().await;
    let (status, body) = send_json(
        addr,
        "POST",
        "/api/leads/appointment",
        &json!({
            "name": "Ravi Kelkar",
            "email": "ravi@example.com",
            "phone": "9860041520",
            "preferredDate": "2026-08-20",
            "preferredTime": "14:30",
            "serviceInterested": "Assisted Living"
        }),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["data"]["preferredDate"], "2026-08-20");

    let (_, _, listing) = get(addr, "/api/leads?source=appointment").await;
    let rows = listing["data"].as_array().expect("lead rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["priority"], "high");

    let (status, body) = send_json(
        addr,
        "POST",
        "/api/leads/appointment",
        &json!({
            "name": "Ravi Kelkar",
            "email": "ravi@example.com",
            "phone": "9860041520",
            "preferredDate": "20-08-2026"
        }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["errors"][0]["field"], "preferredDate");
}

#[tokio::test]
async fn visit_request_requires_core_fields_and_creates_a_visitor_not_a_lead() {
    let addr = memory_server().await;
    let (status, body) = send_json(
        addr,
        "POST",
        "/api/leads/visit-request",
        &json!({"name": "Meena", "phone": "9860041520"}),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["errors"].as_array().expect("violations").len() >= 3);

    let (status, body) = send_json(
        addr,
        "POST",
        "/api/leads/visit-request",
        &json!({
            "name": "Meena Apte",
            "phone": "9860041520",
            "service": "Assisted Living",
            "visitDate": "2026-08-21",
            "visitTime": "11:00"
        }),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["data"]["visitDate"], "2026-08-21");

    let (_, _, listing) = get(addr, "/api/leads").await;
    assert!(
        listing["data"].as_array().expect("lead rows").is_empty(),
        "visit requests are visitors, not leads"
    );
}

#[tokio::test]
async fn admission_steps_accumulate_under_one_application_id() {
    let addr = memory_server().await;

    let (status, first) = send_json(
        addr,
        "POST",
        "/api/leads/admission/step",
        &json!({
            "step": 1,
            "data": {
                "firstName": "Leela",
                "lastName": "Naik",
                "email": "leela@example.com",
                "phone": "9860041520"
            }
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(first["message"], "Step 1 saved successfully");
    let application_id = first["data"]["applicationId"]
        .as_str()
        .expect("application id")
        .to_string();
    assert!(application_id.starts_with("EH"));
    assert_eq!(application_id.len(), 10);
    assert_eq!(first["data"]["currentStep"], 1);

    let (status, second) = send_json(
        addr,
        "POST",
        "/api/leads/admission/step",
        &json!({
            "applicationId": application_id,
            "step": 2,
            "data": {"city": "Pune", "pincode": "411045"}
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(second["data"]["currentStep"], 2);

    let (status, _, fetched) = get(addr, &format!("/api/leads/admission/{application_id}")).await;
    assert_eq!(status, 200);
    let app = &fetched["data"];
    assert_eq!(app["status"], "in_progress");
    assert_eq!(app["steps"]["step1"]["firstName"], "Leela");
    assert_eq!(app["steps"]["step2"]["city"], "Pune");

    // Idempotent per step: the same payload leaves the record unchanged.
    let (_, resubmit) = send_json(
        addr,
        "POST",
        "/api/leads/admission/step",
        &json!({
            "applicationId": application_id,
            "step": 2,
            "data": {"city": "Pune", "pincode": "411045"}
        }),
    )
    .await;
    assert_eq!(resubmit["data"]["currentStep"], 2);
    let (_, _, refetched) = get(addr, &format!("/api/leads/admission/{application_id}")).await;
    assert_eq!(refetched["data"]["steps"]["step2"], app["steps"]["step2"]);
}

#[tokio::test]
async fn completing_an_application_derives_a_lead_from_steps_one_and_six() {
    let addr = memory_server().await;
    let (_, first) = send_json(
        addr,
        "POST",
        "/api/leads/admission/step",
        &json!({
            "step": 1,
            "data": {"firstName": "Leela", "lastName": "Naik", "email": "", "phone": ""}
        }),
    )
    .await;
    let application_id = first["data"]["applicationId"]
        .as_str()
        .expect("application id")
        .to_string();
    send_json(
        addr,
        "POST",
        "/api/leads/admission/step",
        &json!({
            "applicationId": application_id,
            "step": 6,
            "data": {
                "guardianName": "Suhas Naik",
                "guardianEmail": "suhas@example.com",
                "guardianPhone": "9822011223"
            }
        }),
    )
    .await;

    let (status, completed) = send_json(
        addr,
        "POST",
        "/api/leads/admission/complete",
        &json!({"applicationId": application_id}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(completed["data"]["status"], "completed");

    let (_, _, fetched) = get(addr, &format!("/api/leads/admission/{application_id}")).await;
    assert_eq!(fetched["data"]["status"], "completed");
    assert!(fetched["data"]["completedAt"].is_string());

    let (_, _, listing) = get(addr, "/api/leads").await;
    let rows = listing["data"].as_array().expect("lead rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Leela Naik");
    assert_eq!(rows[0]["email"], "suhas@example.com", "guardian fallback");
    assert_eq!(rows[0]["source"], "other");
    assert_eq!(rows[0]["priority"], "high");
}

#[tokio::test]
async fn completing_an_unknown_application_is_not_found_and_writes_nothing() {
    let addr = memory_server().await;
    let (status, body) = send_json(
        addr,
        "POST",
        "/api/leads/admission/complete",
        &json!({"applicationId": "EH00000000"}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Application not found");

    let (_, _, listing) = get(addr, "/api/leads").await;
    assert!(listing["data"].as_array().expect("lead rows").is_empty());
}

#[tokio::test]
async fn status_patch_requires_the_durable_store() {
    let addr = memory_server().await;
    let (status, body) = send_json(
        addr,
        "PATCH",
        "/api/leads/1/status",
        &json!({"status": "contacted"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Database not connected");
}

#[tokio::test]
async fn durable_store_supports_listing_filters_and_status_patches() {
    let dir = tempdir().expect("tempdir");
    let store = SqliteStore::open(&dir.path().join("intake.sqlite")).expect("open sqlite");
    let addr = spawn_server(AppState::new(Arc::new(store))).await;

    let (status, created) = send_json(addr, "POST", "/api/leads/inquiry", &inquiry_body()).await;
    assert_eq!(status, 201);
    let id = created["data"]["id"].as_str().expect("lead id").to_string();

    send_json(
        addr,
        "POST",
        "/api/leads/appointment",
        &json!({
            "name": "Ravi Kelkar",
            "email": "ravi@example.com",
            "phone": "9860041520"
        }),
    )
    .await;

    let (_, _, filtered) = get(addr, "/api/leads?source=contact_form").await;
    let rows = filtered["data"].as_array().expect("lead rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(filtered["pagination"]["total"], 1);

    let (status, patched) = send_json(
        addr,
        "PATCH",
        &format!("/api/leads/{id}/status"),
        &json!({"status": "contacted", "priority": "urgent", "notes": "Called back"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(patched["data"]["status"], "contacted");
    assert_eq!(patched["data"]["priority"], "urgent");
    assert_eq!(patched["data"]["notes"][0]["text"], "Called back");
    assert_eq!(patched["data"]["notes"][0]["addedBy"], "Admin");

    let (_, _, by_status) = get(addr, "/api/leads?status=contacted").await;
    assert_eq!(by_status["data"].as_array().expect("rows").len(), 1);

    let (status, missing) = send_json(
        addr,
        "PATCH",
        "/api/leads/9999/status",
        &json!({"status": "contacted"}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(missing["message"], "Lead not found");

    let (status, invalid) = send_json(
        addr,
        "PATCH",
        &format!("/api/leads/{id}/status"),
        &json!({"status": "archived"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(invalid["errors"][0]["field"], "status");
}

#[tokio::test]
async fn admission_survives_in_the_durable_store_too() {
    let dir = tempdir().expect("tempdir");
    let store = SqliteStore::open(&dir.path().join("admission.sqlite")).expect("open sqlite");
    let addr = spawn_server(AppState::new(Arc::new(store))).await;

    let (_, first) = send_json(
        addr,
        "POST",
        "/api/leads/admission/step",
        &json!({"step": 3, "data": {"howDidYouKnow": "friend"}}),
    )
    .await;
    let application_id = first["data"]["applicationId"]
        .as_str()
        .expect("application id")
        .to_string();
    assert_eq!(first["data"]["currentStep"], 3);

    // Steps may arrive out of order; an earlier step can follow a later one.
    let (_, second) = send_json(
        addr,
        "POST",
        "/api/leads/admission/step",
        &json!({
            "applicationId": application_id,
            "step": 1,
            "data": {"firstName": "Madhav", "lastName": "Joshi"}
        }),
    )
    .await;
    assert_eq!(second["data"]["currentStep"], 1);

    let (status, _, fetched) = get(addr, &format!("/api/leads/admission/{application_id}")).await;
    assert_eq!(status, 200);
    assert_eq!(fetched["data"]["steps"]["step3"]["howDidYouKnow"], "friend");
    assert_eq!(fetched["data"]["steps"]["step1"]["firstName"], "Madhav");

    let (status, _) = send_json(
        addr,
        "POST",
        "/api/leads/admission/step",
        &json!({"applicationId": "EH99999999", "step": 2, "data": {}}),
    )
    .await;
    assert_eq!(status, 404);
}
