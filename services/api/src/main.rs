use tracing::info;

use assignhub_api::config::ApiConfig;
use assignhub_api::infra::db;
use assignhub_api::router::build_router;
use assignhub_api::state::AppState;
use assignhub_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let database = db::connect(&config.database_uri(), &config.db_name)
        .await
        .expect("failed to connect to database");

    let state = AppState::with_database(&database, &config);

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
