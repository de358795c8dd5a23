//! End-to-end tests against the full router.
//!
//! Every test builds a fresh service with a fixed random source so scan
//! results are deterministic.

use std::collections::HashSet;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use pocket_guardian_control::ChecklistService;
use pocket_guardian_core::{FixedRandom, RandomSource, SequenceRandom};
use pocket_guardian_gateway::{create_router, GatewayConfig, GatewayState};

fn server_with(rng: Arc<dyn RandomSource>) -> TestServer {
    let checklist = Arc::new(ChecklistService::with_random(rng));
    let app = create_router(GatewayState::new(checklist, GatewayConfig::default()));
    TestServer::new(app).unwrap()
}

fn server(draw: f64) -> TestServer {
    server_with(Arc::new(FixedRandom::new(draw)))
}

async fn history(server: &TestServer) -> Vec<Value> {
    let response = server.get("/history").await;
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}

// =============================================================================
// Service
// =============================================================================

#[tokio::test]
async fn root_reports_name_and_version() {
    let server = server(0.5);

    let body: Value = server.get("/").await.json();

    assert_eq!(body["message"], "Pocket Guardian API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_is_ok() {
    let server = server(0.5);
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn modes_lists_seeded_catalog() {
    let server = server(0.5);

    let body: Value = server.get("/modes").await.json();

    assert_eq!(body["modes"]["Daily"], json!(["Wallet", "Keys"]));
    assert_eq!(body["modes"]["College"], json!(["Wallet", "ID", "Earbuds"]));
    assert_eq!(body["modes"]["Gym"], json!(["Wallet", "Bottle", "Towel"]));
    assert_eq!(body["modes"]["Trip"], json!(["Wallet", "Charger", "Powerbank"]));
}

// =============================================================================
// Scans
// =============================================================================

#[tokio::test]
async fn gym_scan_all_detected_logs_nothing() {
    let server = server(0.9);

    let response = server.get("/scan").add_query_param("mode", "Gym").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mode"], "Gym");
    assert_eq!(
        body["items"],
        json!([
            {"name": "Wallet", "status": "detected"},
            {"name": "Bottle", "status": "detected"},
            {"name": "Towel", "status": "detected"},
        ])
    );
    assert_eq!(body["all_detected"], true);
    assert_eq!(body["missing_items"], json!([]));

    assert!(history(&server).await.is_empty());
}

#[tokio::test]
async fn gym_scan_all_missing_logs_three_entries_first() {
    let server = server(0.0);

    server
        .post("/history")
        .json(&json!({
            "item_name": "Keys",
            "mode": "Daily",
            "timestamp": "2020-01-01T00:00:00.000000",
        }))
        .await
        .assert_status_ok();

    let body: Value = server
        .get("/scan")
        .add_query_param("mode", "Gym")
        .await
        .json();
    assert_eq!(body["missing_items"], json!(["Wallet", "Bottle", "Towel"]));

    let entries = history(&server).await;
    assert_eq!(entries.len(), 4);
    for entry in &entries[..3] {
        assert_eq!(entry["mode"], "Gym");
        assert_eq!(entry["status"], "missing");
    }
    assert_eq!(entries[3]["item_name"], "Keys");

    let names: HashSet<&str> = entries[..3]
        .iter()
        .map(|e| e["item_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, HashSet::from(["Wallet", "Bottle", "Towel"]));
}

#[tokio::test]
async fn scan_defaults_to_daily() {
    let server = server(0.9);

    let body: Value = server.get("/scan").await.json();

    assert_eq!(body["mode"], "Daily");
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn scan_unknown_mode_is_bad_request() {
    let server = server(0.0);

    let response = server.get("/scan").add_query_param("mode", "Office").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "bad_request");
    assert!(body["error"]["message"].as_str().unwrap().contains("Office"));

    assert!(history(&server).await.is_empty());
}

#[tokio::test]
async fn scan_with_duplicate_mode_is_bad_request() {
    let server = server(0.0);

    let response = server
        .get("/scan")
        .add_query_param("mode", "Gym")
        .add_query_param("mode", "Trip")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "bad_request");
    assert!(body["error"]["message"].as_str().unwrap().contains("mode"));

    assert!(history(&server).await.is_empty());
}

#[tokio::test]
async fn post_scan_uses_custom_items_and_logs_missing() {
    let server = server_with(Arc::new(SequenceRandom::new(vec![0.9, 0.1])));

    let response = server
        .post("/scan")
        .json(&json!({"mode": "Office", "custom_items": ["Laptop", "Badge"]}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["items"],
        json!([
            {"name": "Laptop", "status": "detected"},
            {"name": "Badge", "status": "missing"},
        ])
    );
    assert_eq!(body["all_detected"], false);

    let entries = history(&server).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["item_name"], "Badge");
    assert_eq!(entries[0]["mode"], "Office");
}

#[tokio::test]
async fn post_scan_without_items_for_unknown_mode_is_bad_request() {
    let server = server(0.5);

    server
        .post("/scan")
        .json(&json!({"mode": "Office"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/scan")
        .json(&json!({"mode": "Office", "custom_items": []}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_scan_without_mode_is_unprocessable() {
    let server = server(0.5);

    let response = server
        .post("/scan")
        .json(&json!({"custom_items": ["Laptop"]}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "unprocessable_entity"
    );
}

// =============================================================================
// History
// =============================================================================

#[tokio::test]
async fn history_is_newest_first() {
    let server = server(0.5);

    for (item, ts) in [
        ("T1", "2024-05-01T08:00:00.000000"),
        ("T3", "2024-05-03T08:00:00.000000"),
        ("T2", "2024-05-02T08:00:00.000000"),
    ] {
        server
            .post("/history")
            .json(&json!({"item_name": item, "mode": "Daily", "timestamp": ts}))
            .await
            .assert_status_ok();
    }

    let names: Vec<_> = history(&server)
        .await
        .iter()
        .map(|e| e["item_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["T3", "T2", "T1"]);
}

#[tokio::test]
async fn add_history_returns_stored_entry() {
    let server = server(0.5);

    let body: Value = server
        .post("/history")
        .json(&json!({
            "item_name": "Towel",
            "mode": "Gym",
            "timestamp": "2024-05-01T08:30:00",
        }))
        .await
        .json();

    assert_eq!(body["message"], "History item added successfully");
    assert_eq!(
        body["entry"],
        json!({
            "id": 1,
            "item_name": "Towel",
            "mode": "Gym",
            "timestamp": "2024-05-01T08:30:00.000000",
            "status": "missing",
        })
    );
}

#[tokio::test]
async fn add_history_missing_field_is_unprocessable() {
    let server = server(0.5);

    server
        .post("/history")
        .json(&json!({"item_name": "Towel", "mode": "Gym"}))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    server
        .post("/history")
        .text("item_name=Towel")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert!(history(&server).await.is_empty());
}

#[tokio::test]
async fn add_history_over_body_limit_is_payload_too_large() {
    let server = server(0.5);

    let response = server
        .post("/history")
        .json(&json!({
            "item_name": "x".repeat(70 * 1024),
            "mode": "Gym",
            "timestamp": "2024-05-01T08:30:00",
        }))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.json::<Value>()["error"]["code"], "payload_too_large");
    assert!(history(&server).await.is_empty());
}

#[tokio::test]
async fn add_history_space_separated_timestamp_sorts_with_iso() {
    let server = server(0.5);

    for (name, timestamp) in [
        ("Early", "2024-05-01T08:00:00.000000"),
        ("Late", "2024-05-01 09:00:00"),
    ] {
        server
            .post("/history")
            .json(&json!({"item_name": name, "mode": "Daily", "timestamp": timestamp}))
            .await
            .assert_status_ok();
    }

    let entries = history(&server).await;
    assert_eq!(entries[0]["item_name"], "Late");
    assert_eq!(entries[0]["timestamp"], "2024-05-01T09:00:00.000000");
    assert_eq!(entries[1]["item_name"], "Early");
}

#[tokio::test]
async fn clear_history_restarts_ids() {
    let server = server(0.0);
    server.get("/scan").add_query_param("mode", "Trip").await;

    let body: Value = server.delete("/history").await.json();
    assert_eq!(body["message"], "History cleared successfully");
    assert_eq!(body["removed"], 3);
    assert!(history(&server).await.is_empty());

    let body: Value = server
        .post("/history")
        .json(&json!({
            "item_name": "Charger",
            "mode": "Trip",
            "timestamp": "2024-05-01T08:30:00",
        }))
        .await
        .json();
    assert_eq!(body["entry"]["id"], 1);
}

#[tokio::test]
async fn concurrent_history_posts_get_distinct_ids() {
    let server = server(0.5);
    let server = &server;

    let requests = (0..32).map(|i| async move {
        server
            .post("/history")
            .json(&json!({
                "item_name": format!("item-{i}"),
                "mode": "Daily",
                "timestamp": "2024-05-01T08:30:00",
            }))
            .await
            .json::<Value>()["entry"]["id"]
            .as_u64()
            .unwrap()
    });
    let ids: HashSet<u64> = futures::future::join_all(requests)
        .await
        .into_iter()
        .collect();

    assert_eq!(ids.len(), 32);
    assert_eq!(history(server).await.len(), 32);
}

// =============================================================================
// BLE objects
// =============================================================================

#[tokio::test]
async fn register_then_list_objects() {
    let server = server(0.5);

    let body: Value = server
        .post("/register_ble")
        .json(&json!({"object_name": "Keys", "ble_uuid": "XYZ"}))
        .await
        .json();
    assert_eq!(body["object_name"], "Keys");
    assert_eq!(body["ble_uuid"], "XYZ");

    let body: Value = server.get("/objects").await.json();
    assert_eq!(body, json!({"objects": {"Keys": "XYZ"}, "count": 1}));
}

#[tokio::test]
async fn register_overwrites_existing_object() {
    let server = server(0.5);

    for uuid in ["OLD", "NEW"] {
        server
            .post("/register_ble")
            .json(&json!({"object_name": "Wallet", "ble_uuid": uuid}))
            .await
            .assert_status_ok();
    }

    let body: Value = server.get("/objects").await.json();
    assert_eq!(body, json!({"objects": {"Wallet": "NEW"}, "count": 1}));
}

#[tokio::test]
async fn register_blank_name_is_unprocessable() {
    let server = server(0.5);

    server
        .post("/register_ble")
        .json(&json!({"object_name": " ", "ble_uuid": "XYZ"}))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(server.get("/objects").await.json::<Value>()["count"], 0);
}

#[tokio::test]
async fn ble_scan_reports_presence() {
    let server = server(0.5);
    for (name, uuid) in [("Wallet", "UUID-A"), ("Keys", "UUID-B")] {
        server
            .post("/register_ble")
            .json(&json!({"object_name": name, "ble_uuid": uuid}))
            .await
            .assert_status_ok();
    }

    let body: Value = server
        .post("/scan/ble")
        .json(&json!({"ble_uuids": ["UUID-A", "UUID-Z"]}))
        .await
        .json();
    assert_eq!(
        body,
        json!({"results": {"Wallet": "present", "Keys": "missing"}})
    );

    let body: Value = server
        .post("/scan/ble")
        .json(&json!({"ble_uuids": []}))
        .await
        .json();
    assert_eq!(
        body,
        json!({"results": {"Wallet": "missing", "Keys": "missing"}})
    );
}

#[tokio::test]
async fn unregister_removes_object() {
    let server = server(0.5);
    server
        .post("/register_ble")
        .json(&json!({"object_name": "Keys", "ble_uuid": "XYZ"}))
        .await
        .assert_status_ok();

    let response = server.delete("/register_ble/Keys").await;
    response.assert_status_ok();
    assert!(response.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .contains("Keys"));

    let body: Value = server.get("/objects").await.json();
    assert_eq!(body, json!({"objects": {}, "count": 0}));
}

#[tokio::test]
async fn unregister_unknown_object_is_not_found() {
    let server = server(0.5);
    server
        .post("/register_ble")
        .json(&json!({"object_name": "Keys", "ble_uuid": "XYZ"}))
        .await
        .assert_status_ok();

    let response = server.delete("/register_ble/Wallet").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");

    let body: Value = server.get("/objects").await.json();
    assert_eq!(body["count"], 1);
}
