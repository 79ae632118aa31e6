//! Bookline Server - Service Booking Platform
//!
//! REST API server turning provider availability into bookable slots and
//! validating customer booking requests against them.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookline_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookline_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookline Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.booking.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Providers (public booking page)
        .route("/providers/:id", get(api::providers::get_provider))
        .route("/providers/:id/services", get(api::providers::list_services))
        .route("/services/:id", get(api::providers::get_service))
        // Schedule management
        .route("/providers/:id/schedule", get(api::schedule::get_schedule))
        .route(
            "/providers/:id/schedule/:day/availability",
            put(api::schedule::set_day_availability),
        )
        .route(
            "/providers/:id/schedule/:day/times",
            put(api::schedule::set_day_times),
        )
        .route(
            "/providers/:id/blocked-dates",
            get(api::schedule::list_blocked_dates),
        )
        .route(
            "/providers/:id/blocked-dates",
            post(api::schedule::create_blocked_date),
        )
        .route("/blocked-dates/:id", delete(api::schedule::delete_blocked_date))
        .route("/providers/:id/slots", get(api::schedule::list_slots))
        // Bookings
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings/:id", get(api::bookings::get_booking))
        .route("/providers/:id/bookings", get(api::bookings::list_bookings))
        .route("/bookings/:id/status", put(api::bookings::update_booking_status))
        .route("/bookings/:id/paid", put(api::bookings::update_booking_paid))
        .route("/bookings/:id/schedule", put(api::bookings::reschedule_booking))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
