use actix_web::http::StatusCode;
use actix_web::test;
use backoffice::routes::links::AdminLinks;
use backoffice::state::app_state::AppState;
use backoffice_test_support::assert_problem_details;

use crate::support::create_test_app;

#[actix_web::test]
async fn missing_db_is_problem_503_with_matching_trace_ids() {
    let app = create_test_app(AppState::new_without_db(AdminLinks::default())).await;

    let req = test::TestRequest::get().uri("/admin/district").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(!request_id.is_empty());

    let problem =
        assert_problem_details(resp, "DB_UNAVAILABLE", StatusCode::SERVICE_UNAVAILABLE).await;
    assert_eq!(problem.trace_id, request_id);
    assert_eq!(problem.title, "Db Unavailable");
}

#[actix_web::test]
async fn every_response_gets_a_distinct_request_id() {
    let app = create_test_app(AppState::new_without_db(AdminLinks::default())).await;

    let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let second = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    let first_id = first.headers().get("x-request-id").unwrap().clone();
    let second_id = second.headers().get("x-request-id").unwrap().clone();
    assert_ne!(first_id, second_id);
}
