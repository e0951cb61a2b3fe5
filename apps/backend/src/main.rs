use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use trivia_backend::config::db::DbConfig;
use trivia_backend::config::server::ServerConfig;
use trivia_backend::infra::state::build_state;
use trivia_backend::middleware::{
    cors_middleware, RequestTrace, StructuredLogger, TraceSpan,
};
use trivia_backend::{routes, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: env_file / --env-file
    // - Local dev: set -a; . ./.env; set +a
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };
    let db_config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, "starting trivia backend");

    let app_state = match build_state().with_db(db_config).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);
    let origins = server.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
