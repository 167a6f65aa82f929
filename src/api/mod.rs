pub mod error;

mod products;
mod reminders;
mod users;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Builds the application router with all routes and middleware attached.
///
/// CORS mirrors the requesting origin and allows credentials, which is how
/// a wildcard policy has to be spelled when credentials are in play.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Account endpoints
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        // Warranty registrations
        .route("/add-product", post(products::add_product))
        // Reminder settings
        .route("/api/reminder-settings", get(reminders::get_reminder_settings))
        .route("/api/reminder-settings", post(reminders::save_reminder_settings))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
