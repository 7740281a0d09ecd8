//! Router assembly.

mod common;
mod hero;

pub use common::common_routes;
pub use hero::hero_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

/// Full application: common and hero routes with a request body size limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(hero_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
}
