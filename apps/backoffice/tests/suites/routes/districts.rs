use actix_web::http::StatusCode;
use actix_web::test;
use backoffice::views::PLACEHOLDER_IMAGE;
use backoffice_test_support::assert_problem_details;

use crate::support::{create_test_app, memory_state, seed_geography};

#[actix_web::test]
async fn index_renders_one_card_per_top_level_district() {
    let state = memory_state().await;
    let geo = seed_geography(state.db().unwrap()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/admin/district").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body.matches("grid-item").count(), 3);
    assert_eq!(body.matches(PLACEHOLDER_IMAGE).count(), 3);
    assert!(body.contains(&format!("<div>{}#</div>", geo.central_id)));
    assert!(body.contains("<div>South</div>"));
    assert!(!body.contains("Old Town"));

    // only Central has nested districts
    assert!(body.contains(&format!(r#"href="/admin/district/{}""#, geo.central_id)));
    assert!(!body.contains(&format!(r#"href="/admin/district/{}""#, geo.harbor_id)));
    assert!(!body.contains(&format!(r#"href="/admin/district/{}""#, geo.dunes_id)));
}

#[actix_web::test]
async fn index_with_no_districts_renders_empty_grid() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get().uri("/admin/district").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains(r#"<div class="row grid"></div>"#));
}

#[actix_web::test]
async fn show_lists_nested_districts() {
    let state = memory_state().await;
    let geo = seed_geography(state.db().unwrap()).await;
    let app = create_test_app(state).await;

    let uri = format!("/admin/district/{}", geo.central_id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("<title>Central</title>"));
    assert_eq!(body.matches("grid-item").count(), 1);
    assert!(body.contains("<div>Old Town</div>"));
}

#[actix_web::test]
async fn show_missing_district_is_problem_404() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get().uri("/admin/district/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "DISTRICT_NOT_FOUND", StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn show_rejects_non_numeric_id() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get().uri("/admin/district/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "INVALID_ID", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn destroy_removes_district_and_nested() {
    let state = memory_state().await;
    let geo = seed_geography(state.db().unwrap()).await;
    let app = create_test_app(state).await;

    let uri = format!("/admin/district/{}", geo.central_id);
    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/admin/district").to_request(),
    )
    .await;
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body.matches("grid-item").count(), 2);
}

#[actix_web::test]
async fn destroy_missing_is_problem_404() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::delete().uri("/admin/district/31").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem_details(resp, "DISTRICT_NOT_FOUND", StatusCode::NOT_FOUND).await;
    assert!(problem.detail.contains("31"));
}
