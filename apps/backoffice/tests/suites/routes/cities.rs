use actix_web::http::{header, StatusCode};
use actix_web::test;
use backoffice::repos::cities;
use backoffice_test_support::assert_problem_details;

use crate::support::{create_test_app, memory_state, seed_geography};

#[actix_web::test]
async fn edit_renders_form_for_city() {
    let state = memory_state().await;
    let geo = seed_geography(state.db().unwrap()).await;
    let app = create_test_app(state).await;

    let uri = format!("/admin/city/{}/edit", geo.metro_id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains(&format!(r#"action="/admin/city/{}""#, geo.metro_id)));
    assert!(body.contains(r#"value="Metro""#));
    assert!(body.contains("<div>North</div>"));
}

#[actix_web::test]
async fn edit_missing_city_is_problem_404() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get().uri("/admin/city/404/edit").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "CITY_NOT_FOUND", StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn update_renames_and_redirects_to_index() {
    let state = memory_state().await;
    let db = state.db().unwrap().clone();
    let geo = seed_geography(&db).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri(&format!("/admin/city/{}", geo.metro_id))
        .set_form([("name", " Metropolis ")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/admin/district"
    );

    let city = cities::find_with_state(&db, geo.metro_id).await.unwrap();
    assert_eq!(city.city.name, "Metropolis");

    // the grid picks up the new name
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/admin/district").to_request(),
    )
    .await;
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body.matches("<div>Metropolis</div>").count(), 2);
}

#[actix_web::test]
async fn update_with_blank_name_is_problem_400() {
    let state = memory_state().await;
    let db = state.db().unwrap().clone();
    let geo = seed_geography(&db).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri(&format!("/admin/city/{}", geo.metro_id))
        .set_form([("name", "   ")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "INVALID_CITY_NAME", StatusCode::BAD_REQUEST).await;

    let city = cities::find_with_state(&db, geo.metro_id).await.unwrap();
    assert_eq!(city.city.name, "Metro");
}

#[actix_web::test]
async fn update_with_overlong_name_is_problem_400() {
    let state = memory_state().await;
    let geo = seed_geography(state.db().unwrap()).await;
    let app = create_test_app(state).await;

    let long_name = "x".repeat(256);
    let req = test::TestRequest::post()
        .uri(&format!("/admin/city/{}", geo.metro_id))
        .set_form([("name", long_name.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "INVALID_CITY_NAME", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn update_missing_city_is_problem_404() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::post()
        .uri("/admin/city/808")
        .set_form([("name", "Ghost")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "CITY_NOT_FOUND", StatusCode::NOT_FOUND).await;
}
