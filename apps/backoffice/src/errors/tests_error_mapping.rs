// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use actix_web::ResponseError;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_city_name_validation_to_400() {
    let de = DomainError::validation(ValidationKind::CityName, "name must not be empty");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidCityName);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found_kinds() {
    let cases = [
        (NotFoundKind::District, "DISTRICT_NOT_FOUND"),
        (NotFoundKind::City, "CITY_NOT_FOUND"),
        (NotFoundKind::State, "STATE_NOT_FOUND"),
        (NotFoundKind::ProductPackage, "PRODUCT_PACKAGE_NOT_FOUND"),
        (NotFoundKind::Other("thing".into()), "NOT_FOUND"),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::not_found(kind, "missing").into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.status().as_u16(), 404);
    }
}

#[test]
fn missing_reference_is_a_client_error() {
    let de = DomainError::conflict(ConflictKind::MissingReference, "no such city");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_infra() {
    let down: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert!(matches!(down, AppError::DbUnavailable));
    assert_eq!(down.status().as_u16(), 503);

    let corrupt: AppError =
        DomainError::infra(InfraErrorKind::DataCorruption, "orphan district").into();
    assert_eq!(corrupt.code(), ErrorCode::DataCorruption);
    assert_eq!(corrupt.status().as_u16(), 500);

    let other: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "boom").into();
    assert_eq!(other.code(), ErrorCode::DbError);
}

#[test]
fn error_response_is_problem_json_with_trace_header() {
    let app = AppError::not_found(ErrorCode::DistrictNotFound, "district 9 not found");
    let resp = app.error_response();

    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/problem+json"
    );
    // outside a request scope the trace id falls back to "unknown"
    assert_eq!(resp.headers().get("x-trace-id").unwrap(), "unknown");
}

#[test]
fn humanized_title() {
    assert_eq!(
        AppError::humanize_code("PRODUCT_PACKAGE_NOT_FOUND"),
        "Product Package Not Found"
    );
}
