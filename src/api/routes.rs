use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{AppState, get_player};
use crate::services::aggregator::PlayerSource;

pub fn create_router<S: PlayerSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/api/player", get(get_player::<S>))
        .with_state(state)
}
