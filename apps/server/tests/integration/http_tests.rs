//! HTTP handler tests.

use actix_web::{App, http::StatusCode, test, web};
use lms_admin_lib::api;
use lms_admin_lib::db::DbPool;
use lms_admin_lib::i18n::{Language, Translator};
use lms_admin_lib::middleware::RequestLogger;
use serde_json::Value;

use crate::helpers::{add_group, empty_sqlite_pool, sqlite_pool};

macro_rules! app {
    ($pool:expr, $translator:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestLogger)
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new($translator))
                .configure(api::configure),
        )
        .await
    };
}

async fn seeded_pool() -> DbPool {
    let pool = sqlite_pool().await;
    add_group(&pool, "Routers", 1, 2, 1).await;
    add_group(&pool, "Access points", 2, 3, 50).await;
    pool
}

#[actix_rt::test]
async fn test_nodegroups_page_renders_html() {
    let pool = seeded_pool().await;
    let app = app!(pool, Translator::default());

    let req = test::TestRequest::get().uri("/nodegroups").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<title>LMS: Node Groups List</title>"));
    assert!(html.find("Routers").unwrap() < html.find("Access points").unwrap());
    assert!(html.contains("Total: 2"));
}

#[actix_rt::test]
async fn test_nodegroups_page_polish_title() {
    let pool = seeded_pool().await;
    let app = app!(pool, Translator::new(Language::Polish));

    let req = test::TestRequest::get().uri("/nodegroups").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("Lista grup komputerów"));
    assert!(html.contains(r#"<html lang="pl">"#));
}

#[actix_rt::test]
async fn test_nodegroups_json_payload() {
    let pool = seeded_pool().await;
    let app = app!(pool, Translator::default());

    let req = test::TestRequest::get()
        .uri("/api/v1/nodegroups")
        .to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(json["title"], "Node Groups List");
    assert_eq!(json["template"], "nodegrouplist.html");
    assert_eq!(json["listdata"]["total"], 2);
    assert_eq!(json["listdata"]["nodestotal"], 5);
    assert_eq!(json["nodegrouplist"][0]["name"], "Routers");
    assert_eq!(json["nodegrouplist"][0]["nodescount"], 2);
    assert_eq!(json["nodegrouplist"][1]["name"], "Access points");
    // Totals live only in listdata.
    assert!(json["nodegrouplist"][0].get("total").is_none());
}

#[actix_rt::test]
async fn test_nodegroups_page_survives_query_failure() {
    let pool = empty_sqlite_pool().await;
    let app = app!(pool, Translator::default());

    let req = test::TestRequest::get().uri("/nodegroups").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("No such groups in database."));
    assert!(html.contains("Total: 0"));
}

#[actix_rt::test]
async fn test_health_and_ready() {
    let pool = sqlite_pool().await;
    let app = app!(pool, Translator::default());

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json["status"], "healthy");

    let req = test::TestRequest::get().uri("/api/v1/ready").to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json["status"], "ready");
    assert_eq!(json["dbversion"], "2006081000");
}

#[actix_rt::test]
async fn test_ready_reports_unreadable_version_as_json_error() {
    // No tables: the ping succeeds but the dbinfo read fails.
    let pool = empty_sqlite_pool().await;
    let app = app!(pool, Translator::default());

    let req = test::TestRequest::get().uri("/api/v1/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["error"], "DATABASE_ERROR");
    assert_eq!(json["message"], "An internal database error occurred");
}

#[actix_rt::test]
async fn test_logged_requests_pass_status_through() {
    let pool = sqlite_pool().await;
    let app = app!(pool, Translator::default());

    let req = test::TestRequest::get().uri("/no-such-page").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
