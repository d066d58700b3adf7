use actix_web::{web, HttpResponse};

use super::{html_page, parse_id};
use crate::db::require_db;
use crate::error::AppError;
use crate::repos::districts;
use crate::state::app_state::AppState;
use crate::views::{render_district_grid, render_page};

/// `admin.district.index`: top-level districts.
async fn index(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = districts::list_grid_rows(db, None).await?;

    let grid = render_district_grid(&rows, &app_state.links);
    Ok(html_page(render_page("مناطق", &grid)))
}

/// `admin.district.show`: districts nested under one district.
async fn show(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let district_id = parse_id(&path.into_inner())?;
    let db = require_db(&app_state)?;

    let parent = districts::find(db, district_id).await?;
    let rows = districts::list_grid_rows(db, Some(parent.id)).await?;

    let grid = render_district_grid(&rows, &app_state.links);
    Ok(html_page(render_page(&parent.name, &grid)))
}

/// `admin.district.destroy`
async fn destroy(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let district_id = parse_id(&path.into_inner())?;
    let db = require_db(&app_state)?;

    districts::delete(db, district_id).await?;
    tracing::info!(district_id, "district.destroyed");

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/district").route(web::get().to(index)))
        .service(
            web::resource("/district/{id}")
                .route(web::get().to(show))
                .route(web::delete().to(destroy)),
        );
}
