use actix_web::http::StatusCode;
use actix_web::test;
use backoffice::routes::links::AdminLinks;
use backoffice::state::app_state::AppState;
use serde_json::Value;

use crate::support::{create_test_app, memory_state};

#[actix_web::test]
async fn health_reports_db_and_latest_migration() {
    let app = create_test_app(memory_state().await).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert_eq!(
        body["migrations"],
        "m20210924_165339_create_product_packages_table"
    );
    assert!(body["app_version"].as_str().is_some());
    assert!(body["time"].as_str().is_some());
}

#[actix_web::test]
async fn health_without_db_still_answers() {
    let app = create_test_app(AppState::new_without_db(AdminLinks::default())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    assert!(body["db_error"]
        .as_str()
        .unwrap()
        .starts_with("DB unavailable"));
}

#[actix_web::test]
async fn root_banner() {
    let app = create_test_app(AppState::new_without_db(AdminLinks::default())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Backoffice admin service");
}
