// SPDX-License-Identifier: Apache-2.0

//! Read-path contract: the same endpoints answer identically shaped data
//! whether the store or the bundled dataset serves them, and the `source`
//! tag tells the truth about which tier answered.

mod support;

use elmwood_server::{AppState, MemoryStore, SqliteStore};
use serde_json::Value;
use std::sync::Arc;
use support::{get, spawn_server};
use tempfile::tempdir;

async fn static_server() -> std::net::SocketAddr {
    spawn_server(AppState::new(Arc::new(MemoryStore::new()))).await
}

async fn seeded_sqlite_server() -> (std::net::SocketAddr, tempfile::TempDir) {
    let dir = tempdir().expect("tempdir");
    let store = SqliteStore::open(&dir.path().join("elmwood.sqlite")).expect("open sqlite");
    store.seed_fixtures().await.expect("seed fixtures");
    let addr = spawn_server(AppState::new(Arc::new(store))).await;
    (addr, dir)
}

#[tokio::test]
async fn static_listings_are_active_only_and_order_sorted() {
    let addr = static_server().await;
    let (status, head, body) = get(addr, "/api/website/sliders").await;
    assert_eq!(status, 200);
    assert!(head.contains("x-request-id: "));
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["source"], "static");

    let rows = body["data"].as_array().expect("slider rows");
    assert_eq!(rows.len(), 3, "the inactive seasonal slider is excluded");
    let orders: Vec<i64> = rows
        .iter()
        .map(|r| r["order"].as_i64().expect("order"))
        .collect();
    let mut sorted = orders.clone();
    sorted.sort_unstable();
    assert_eq!(orders, sorted);
}

#[tokio::test]
async fn service_detail_resolves_by_id_then_slug_and_misses_with_404() {
    let addr = static_server().await;

    let (status, _, by_id) = get(addr, "/api/website/services/2").await;
    assert_eq!(status, 200);
    assert_eq!(by_id["data"]["id"], 2);

    let (status, _, by_slug) = get(addr, "/api/website/services/condition-based-meals").await;
    assert_eq!(status, 200);
    assert_eq!(by_slug["data"]["slug"], "condition-based-meals");

    let (status, _, missing) = get(addr, "/api/website/services/no-such-service").await;
    assert_eq!(status, 404);
    assert_eq!(missing["success"], Value::Bool(false));
    assert_eq!(missing["message"], "Service not found");
}

#[tokio::test]
async fn inactive_items_stay_reachable_through_detail_lookups() {
    let addr = static_server().await;
    let (status, _, body) = get(addr, "/api/website/events/1").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["id"], 1);

    // Listing hides nothing here (all events active), but the inactive
    // slider fixture is still absent from its own listing.
    let (_, _, sliders) = get(addr, "/api/website/sliders").await;
    assert!(sliders["data"]
        .as_array()
        .expect("rows")
        .iter()
        .all(|r| r["isActive"] == Value::Bool(true)));
}

#[tokio::test]
async fn faq_category_filter_applies_to_the_static_tier() {
    let addr = static_server().await;
    let (status, _, body) = get(addr, "/api/website/faqs?category=food").await;
    assert_eq!(status, 200);
    let rows = body["data"].as_array().expect("faq rows");
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r["category"] == "food"));

    let (_, _, all) = get(addr, "/api/website/faqs").await;
    assert!(all["data"].as_array().expect("faq rows").len() > rows.len());
}

#[tokio::test]
async fn home_bundle_applies_per_category_limits_and_popup_gate() {
    let addr = static_server().await;
    let (status, _, body) = get(addr, "/api/website/home").await;
    assert_eq!(status, 200);
    let data = &body["data"];
    assert_eq!(data["services"].as_array().expect("services").len(), 3);
    assert!(data["team"].as_array().expect("team").len() <= 4);
    assert!(data["blogs"].as_array().expect("blogs").len() <= 3);
    assert_eq!(data["settings"]["siteName"], "Elmwood House");
    assert_eq!(data["popup"], Value::Null, "inactive popup is withheld");

    let blogs = data["blogs"].as_array().expect("blogs");
    let dates: Vec<&str> = blogs
        .iter()
        .map(|b| b["date"].as_str().expect("date"))
        .collect();
    let mut newest_first = dates.clone();
    newest_first.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(dates, newest_first);
}

#[tokio::test]
async fn about_bundle_has_every_category_with_static_fallback() {
    let addr = static_server().await;
    let (status, _, body) = get(addr, "/api/website/about").await;
    assert_eq!(status, 200);
    let data = &body["data"];
    assert!(data["about"]["mission"].is_string());
    assert_eq!(data["team"].as_array().expect("team").len(), 4);
    assert_eq!(data["statistics"].as_array().expect("stats").len(), 4);
}

#[tokio::test]
async fn seeded_store_answers_with_database_source() {
    let (addr, _dir) = seeded_sqlite_server().await;
    let (status, _, body) = get(addr, "/api/website/services").await;
    assert_eq!(status, 200);
    assert_eq!(body["source"], "database");
    assert_eq!(
        body["data"].as_array().expect("rows").len(),
        6,
        "all active seeded services"
    );

    let (_, _, gallery) = get(addr, "/api/website/gallery/activities").await;
    assert_eq!(gallery["source"], "database");
    assert!(gallery["data"]
        .as_array()
        .expect("rows")
        .iter()
        .all(|r| r["category"] == "activities"));
}

#[tokio::test]
async fn a_nonempty_store_result_never_consults_the_fallback() {
    let dir = tempdir().expect("tempdir");
    let store = SqliteStore::open(&dir.path().join("sparse.sqlite")).expect("open sqlite");
    let one = elmwood_model::Statistic {
        id: 1,
        number: 200,
        suffix: "+".to_string(),
        title: "Meals Served Daily".to_string(),
        is_active: true,
        order: 1,
    };
    store
        .put_content_row(elmwood_server::store::Collection::Statistics, None, None, &one)
        .await
        .expect("insert row");
    let addr = spawn_server(AppState::new(Arc::new(store))).await;

    let (status, _, body) = get(addr, "/api/website/statistics").await;
    assert_eq!(status, 200);
    assert_eq!(body["source"], "database");
    let rows = body["data"].as_array().expect("rows");
    assert_eq!(rows.len(), 1, "the four fixture statistics are not merged in");
    assert_eq!(rows[0]["title"], "Meals Served Daily");
}

#[tokio::test]
async fn empty_store_falls_through_to_static_data() {
    let dir = tempdir().expect("tempdir");
    let store = SqliteStore::open(&dir.path().join("empty.sqlite")).expect("open sqlite");
    let addr = spawn_server(AppState::new(Arc::new(store))).await;

    let (status, _, body) = get(addr, "/api/website/testimonials").await;
    assert_eq!(status, 200);
    assert_eq!(body["source"], "static");
    assert!(!body["data"].as_array().expect("rows").is_empty());
}

#[tokio::test]
async fn blog_detail_bumps_views_once_per_store_path_read() {
    let (addr, _dir) = seeded_sqlite_server().await;

    let (status, _, first) = get(addr, "/api/website/blogs/nutrition-after-seventy").await;
    assert_eq!(status, 200);
    assert_eq!(first["source"], "database");
    assert_eq!(first["data"]["views"], 1);

    let (_, _, second) = get(addr, "/api/website/blogs/nutrition-after-seventy").await;
    assert_eq!(second["data"]["views"], 2);

    let (status, _, missing) = get(addr, "/api/website/blogs/no-such-post").await;
    assert_eq!(status, 404);
    assert_eq!(missing["message"], "Blog post not found");
}

#[tokio::test]
async fn static_blog_detail_never_persists_a_view_count() {
    let addr = static_server().await;
    let (_, _, first) = get(addr, "/api/website/blogs/nutrition-after-seventy").await;
    assert_eq!(first["source"], "static");
    assert_eq!(first["data"]["views"], 0);
    let (_, _, second) = get(addr, "/api/website/blogs/nutrition-after-seventy").await;
    assert_eq!(second["data"]["views"], 0);
}

#[tokio::test]
async fn health_and_db_status_report_the_active_tier() {
    let addr = static_server().await;
    let (status, _, health) = get(addr, "/api/health").await;
    assert_eq!(status, 200);
    assert_eq!(health["status"], "OK");
    assert_eq!(health["database"], "Disconnected");

    let (_, _, db) = get(addr, "/api/db-status").await;
    assert_eq!(db["database"]["kind"], "memory");

    let (addr, _dir) = seeded_sqlite_server().await;
    let (_, _, health) = get(addr, "/api/health").await;
    assert_eq!(health["database"], "Connected");
}

#[tokio::test]
async fn unknown_routes_return_the_failure_envelope() {
    let addr = static_server().await;
    let (status, _, body) = get(addr, "/api/website/no-such-endpoint/extra").await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["message"], "Route not found");
}
