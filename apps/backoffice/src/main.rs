use actix_web::{web, App, HttpServer};
use backoffice::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backoffice::{build_state, routes, AdminLinks, AppConfig};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or sourced manually for local runs).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(config.runtime_env())
        .with_db(config.db_kind)
        .with_links(AdminLinks::new(&config.base_path))
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = %config.host,
        port = config.port,
        db = ?config.db_kind,
        base_path = %config.base_path,
        "backoffice listening"
    );

    let data = web::Data::new(app_state);
    let base_path = config.base_path.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(web::scope(&base_path).configure(routes::configure))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
