use axum::{routing::get, Router};

use crate::{health::health_controller, tagline::tagline_controller::tagline_router};

pub fn application_router() -> Router {
    Router::new()
        .route("/health", get(health_controller::health))
        .merge(tagline_router())
}
