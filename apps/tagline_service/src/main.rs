use std::{env, time::Duration};

use axum::{error_handling::HandleErrorLayer, http::StatusCode, BoxError, Extension, Router};
use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use tagline_service::{
    app_module::{AppConfig, AppState},
    app_router::application_router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{fmt::format::FmtSpan, FmtSubscriber};

#[tokio::main]
async fn main() {
    dotenv().ok();
    let subscriber_builder = FmtSubscriber::builder()
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    if env::var("APP_ENVIRONMENT").unwrap_or("dev".to_string()) == "dev" {
        tracing::subscriber::set_global_default(
            subscriber_builder
                .compact()
                .pretty()
                .with_ansi(true)
                .finish(),
        )
        .expect("setting dev subscriber failed");
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )
        .expect("setting prod subscriber failed");
    }

    let config = AppConfig::from_env();

    let pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await
        .expect("unable to open tagline database");

    let state = AppState::new(&config, pool);
    state
        .store
        .initialize()
        .await
        .expect("unable to initialize taglines table");

    // The outer budget has to cover one 30s attempt per configured model.
    let request_budget = Duration::from_secs(30 * config.models.len() as u64 + 10);

    let app = Router::new().merge(application_router()).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|error: BoxError| async move {
                if error.is::<tower::timeout::error::Elapsed>() {
                    Ok(StatusCode::REQUEST_TIMEOUT)
                } else {
                    Err((
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Unhandled internal error: {}", error),
                    ))
                }
            }))
            .timeout(request_budget)
            .layer(TraceLayer::new_for_http())
            .layer(Extension(state))
            .layer(
                CorsLayer::new()
                    .allow_origin(tower_http::cors::Any)
                    .allow_methods(tower_http::cors::Any)
                    .allow_headers(tower_http::cors::Any),
            )
            .into_inner(),
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("unable to create listener");

    tracing::info!("Server started, listening on port {}", config.port);
    axum::serve(listener, app)
        .await
        .expect("unable to start server");
}
