use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;
use travel_model::SearchResults;

use super::ApiError;
use crate::AppState;

const QUERY_REQUIRED: &str = "Query parameter is required";
const SEARCH_FAILED: &str = "An error occurred while searching";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search))
}

#[derive(Debug, Clone, Deserialize)]
struct SearchQuery {
    query: Option<String>,
}

#[instrument(name = "GET /search", skip(app_state))]
async fn search(
    State(app_state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResults>, ApiError> {
    // A repeated `query` key is rejected by the extractor, same as a missing one.
    let query = match query {
        Ok(Query(SearchQuery { query: Some(query) })) if !query.is_empty() => query,
        _ => return Err(ApiError::bad_request(QUERY_REQUIRED)),
    };

    let repository = app_state.repository();
    let (hotels, cities, countries) = tokio::try_join!(
        repository.search_hotels(&query),
        repository.search_cities(&query),
        repository.search_countries(&query),
    )
    .map_err(|err| ApiError::repository(err, SEARCH_FAILED))?;

    tracing::debug!(
        hotels = hotels.len(),
        cities = cities.len(),
        countries = countries.len(),
        "search finished"
    );

    Ok(Json(SearchResults {
        hotels,
        cities,
        countries,
    }))
}
