use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

mod exchange;
mod health;

pub use exchange::{MealChoice, end, meals, start};
pub use health::health;

pub fn router() -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health::health))
        .route("/exchanges/meals", get(exchange::meals))
        .route("/exchanges/start", post(exchange::start))
        .route("/exchanges/end", post(exchange::end))
        .layer(TraceLayer::new_for_http())
}
