use crate::handlers;
use crate::service::Service;
use axum::{routing::get, Router};

use tower_http::trace::TraceLayer;
use tracing::instrument;

#[instrument(name = "build_app", skip_all)]
pub fn build_app(service: Service) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route(
            "/todos",
            get(handlers::todo::read)
                .post(handlers::todo::create)
                .put(handlers::todo::update)
                .delete(handlers::todo::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
