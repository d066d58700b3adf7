use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::parse_id;
use crate::db::require_db;
use crate::error::AppError;
use crate::repos::product_packages;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct ProductPackageList {
    ids: Vec<i32>,
}

async fn list(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let ids = product_packages::list_ids(db).await?;
    Ok(HttpResponse::Ok().json(ProductPackageList { ids }))
}

async fn create(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let package = product_packages::create(db).await?;
    tracing::info!(product_package_id = package.id, "product_package.created");
    Ok(HttpResponse::Created().json(package))
}

async fn destroy(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let package_id = parse_id(&path.into_inner())?;
    let db = require_db(&app_state)?;

    product_packages::delete(db, package_id).await?;
    tracing::info!(product_package_id = package_id, "product_package.destroyed");

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(web::resource("/{id}").route(web::delete().to(destroy)));
}
