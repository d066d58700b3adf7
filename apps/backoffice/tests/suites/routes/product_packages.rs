use actix_web::http::StatusCode;
use actix_web::test;
use backoffice_test_support::assert_problem_details;
use serde_json::Value;

use crate::support::{create_test_app, memory_state};

#[actix_web::test]
async fn create_list_and_delete() {
    let app = create_test_app(memory_state().await).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/product-packages").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "ids": [] }));

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/product-packages").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/product-packages").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ids"], serde_json::json!([id]));

    let uri = format!("/api/product-packages/{id}");
    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_problem_details(resp, "PRODUCT_PACKAGE_NOT_FOUND", StatusCode::NOT_FOUND).await;
}
