use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use ember_matching::config::AppConfig;
use ember_matching::{routes, AppState};
use ember_shared::clients::rabbitmq::RabbitMQClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ember_shared::middleware::init_tracing("ember-matching");

    let config = AppConfig::load()?;
    let port = config.port;

    // The bearer-token extractor validates against JWT_SECRET
    if std::env::var("JWT_SECRET").is_err() {
        std::env::set_var("JWT_SECRET", &config.jwt_secret);
    }

    // Database pool
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let db = Pool::builder().max_size(10).build(manager)?;

    // Infrastructure clients
    let rabbitmq = RabbitMQClient::connect(&config.rabbitmq_url).await?;

    let state = Arc::new(AppState {
        db,
        config,
        rabbitmq,
    });

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/discover", get(routes::discover::get_potential_matches))
        .route("/likes", post(routes::likes::like_user))
        .route("/matches", get(routes::matches::get_user_matches))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "ember-matching starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
