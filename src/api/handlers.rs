use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, warn};
use std::sync::Arc;

use crate::api::models::{ErrorBody, PlayerParams};
use crate::domain::DisplayRecord;
use crate::errors::ResolveError;
use crate::services::aggregator::{PlayerAggregator, PlayerSource};

pub struct AppState<S> {
    pub aggregator: PlayerAggregator<S>,
}

pub async fn get_player<S: PlayerSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<PlayerParams>,
) -> Result<Json<DisplayRecord>, ResolveError> {
    let record = state
        .aggregator
        .resolve(params.name.as_deref(), params.game.as_deref())
        .await?;

    Ok(Json(DisplayRecord::clone(&record)))
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ResolveError::Validation => {
                warn!("Rejected player lookup: {}", self);
                (StatusCode::BAD_REQUEST, "Player name required")
            }
            ResolveError::Upstream(e) => {
                error!("Player lookup failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Upstream error")
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
