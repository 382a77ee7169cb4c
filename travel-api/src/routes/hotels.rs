use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;
use travel_model::{DocumentId, Hotel};

use super::{error::INVALID_ID_FORMAT, ApiError};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:id", get(get_hotel))
}

#[instrument(name = "GET /hotels/:id", skip(app_state))]
async fn get_hotel(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Hotel>, ApiError> {
    let id = DocumentId::parse(&id).map_err(|_| ApiError::bad_request(INVALID_ID_FORMAT))?;

    app_state
        .repository()
        .hotel(&id)
        .await
        .map_err(|err| ApiError::repository(err, "An error occurred while fetching the hotel"))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Hotel not found"))
}
