//! Hero CRUD routes. The collection is served with and without the trailing slash.

use crate::handlers::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn hero_routes(state: AppState) -> Router {
    Router::new()
        .route("/heroes", get(list).post(create))
        .route("/heroes/", get(list).post(create))
        .route(
            "/heroes/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
