//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `quiz::QuizError` and `kernel::error::AppError`.

mod config;

use axum::{
    Router,
    http::{Method, header},
};
use config::ApiConfig;
use kernel::error::app_error::AppError;
use quiz::{InMemoryQuizRepository, quiz_router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,quiz=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    let repo = match &config.seed_path {
        Some(path) => InMemoryQuizRepository::from_seed_file(path).await?,
        None => {
            tracing::warn!("QUIZ_SEED_PATH not set, serving an empty question bank");
            InMemoryQuizRepository::default()
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origins.clone())
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    let app = Router::new()
        .nest("/api/v1", quiz_router(repo, config.quiz.clone()))
        .fallback(|| async { AppError::not_found("Route not found") })
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!(
        addr = %config.bind_addr,
        concurrent_question_fetch = config.quiz.concurrent_question_fetch,
        "Listening"
    );

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
