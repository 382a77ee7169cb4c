use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;
use travel_model::{City, DocumentId};

use super::{error::INVALID_ID_FORMAT, ApiError};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:id", get(get_city))
}

#[instrument(name = "GET /cities/:id", skip(app_state))]
async fn get_city(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<City>, ApiError> {
    let id = DocumentId::parse(&id).map_err(|_| ApiError::bad_request(INVALID_ID_FORMAT))?;

    app_state
        .repository()
        .city(&id)
        .await
        .map_err(|err| ApiError::repository(err, "An error occurred while fetching the city"))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("City not found"))
}
