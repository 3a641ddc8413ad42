use sea_orm::Database;
use tracing::info;

use portal_verify::config::VerifyConfig;
use portal_verify::router::build_router;
use portal_verify::state::AppState;
use portal_verify::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = VerifyConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create Redis pool");

    let state = AppState {
        db,
        redis,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.verify_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("verification service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
