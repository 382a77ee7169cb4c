use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;
use travel_model::{Country, CountryKey};

use super::ApiError;
use crate::AppState;

const COUNTRY_NOT_FOUND: &str = "Country not found";

pub fn router() -> Router<AppState> {
    Router::new().route("/:id", get(get_country))
}

/// Looks a country up by document id, or by ISO code when the parameter is
/// not shaped like an id.
#[instrument(name = "GET /countries/:id", skip(app_state))]
async fn get_country(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Country>, ApiError> {
    let Some(key) = CountryKey::parse(&id) else {
        return Err(ApiError::not_found(COUNTRY_NOT_FOUND));
    };

    let repository = app_state.repository();
    let country = match &key {
        CountryKey::Id(id) => repository.country(id).await,
        CountryKey::IsoCode(code) => repository.country_by_iso_code(code).await,
    }
    .map_err(|err| ApiError::repository(err, "An error occurred while fetching the country"))?;

    country
        .map(Json)
        .ok_or_else(|| ApiError::not_found(COUNTRY_NOT_FOUND))
}
