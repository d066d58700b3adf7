use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod cities;
pub mod districts;
pub mod health;
pub mod links;
pub mod product_packages;

/// Registers every route. Used by `main.rs` and by the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));
    cfg.configure(health::configure_routes);

    // Admin pages: /admin/district/**, /admin/city/**
    cfg.service(
        web::scope("/admin")
            .configure(districts::configure_routes)
            .configure(cities::configure_routes),
    );

    // JSON API: /api/product-packages/**
    cfg.service(
        web::scope("/api/product-packages").configure(product_packages::configure_routes),
    );
}

/// Parses a positive integer path segment.
pub(crate) fn parse_id(raw: &str) -> Result<i32, AppError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("invalid id {raw:?}: expected a positive integer"),
        )),
    }
}

pub(crate) fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
