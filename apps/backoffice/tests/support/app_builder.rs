use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backoffice::infra::state::build_state;
use backoffice::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backoffice::routes;
use backoffice::state::app_state::AppState;
use db_infra::config::db::{DbKind, RuntimeEnv};

/// Fresh, fully migrated in-memory database per call.
pub async fn memory_state() -> AppState {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build in-memory state")
}

/// The production route table and middleware stack over `state`.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
