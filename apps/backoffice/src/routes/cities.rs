use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::{html_page, parse_id};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::cities;
use crate::state::app_state::AppState;
use crate::views::{render_city_edit_form, render_page};

#[derive(Debug, Deserialize)]
pub struct UpdateCityForm {
    // missing field is reported as an invalid name rather than a form error
    #[serde(default)]
    pub name: String,
}

/// `admin.city.edit`
async fn edit(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let city_id = parse_id(&path.into_inner())?;
    let db = require_db(&app_state)?;

    let city = cities::find_with_state(db, city_id).await?;

    let form = render_city_edit_form(&city, &app_state.links);
    Ok(html_page(render_page(&city.city.name, &form)))
}

/// `admin.city.update`: renames the city, then back to the district index.
async fn update(
    path: web::Path<String>,
    form: web::Form<UpdateCityForm>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let city_id = parse_id(&path.into_inner())?;
    let name = form.into_inner().name;

    let city = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            cities::rename(txn, city_id, &name)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    tracing::info!(city_id = city.id, name = %city.name, "city.renamed");

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, app_state.links.district_index()))
        .finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/city/{id}/edit").route(web::get().to(edit)))
        .service(web::resource("/city/{id}").route(web::post().to(update)));
}
