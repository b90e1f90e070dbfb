use axum::Router;
use axum::routing::get;

pub mod base;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(base::root))
        .route("/health", get(base::health))
}
