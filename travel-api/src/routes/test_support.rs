//! Helpers for driving the router in tests without a live database.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use travel_model::{City, Country, DocumentId, Hotel, IsoCode};

use crate::{
    app_state::AppState,
    repositories::{InMemoryTravelRepository, RepositoryError, TravelRepository},
    router,
};

type Result<T> = std::result::Result<T, RepositoryError>;

pub fn seeded_app() -> Router {
    let repository = InMemoryTravelRepository::seeded().unwrap();
    router::create(AppState::new(repository))
}

pub fn failing_app() -> Router {
    router::create(AppState::new(FailingRepository))
}

pub fn unreachable_app() -> Router {
    router::create(AppState::new(UnreachableRepository))
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

/// Fails every call, standing in for an unreachable database.
struct FailingRepository;

fn failure() -> RepositoryError {
    RepositoryError::MalformedDocument {
        collection: "test",
        message: "simulated failure".to_string(),
    }
}

#[async_trait]
impl TravelRepository for FailingRepository {
    async fn search_hotels(&self, _query: &str) -> Result<Vec<Hotel>> {
        Err(failure())
    }

    async fn search_cities(&self, _query: &str) -> Result<Vec<City>> {
        Err(failure())
    }

    async fn search_countries(&self, _query: &str) -> Result<Vec<Country>> {
        Err(failure())
    }

    async fn hotel(&self, _id: &DocumentId) -> Result<Option<Hotel>> {
        Err(failure())
    }

    async fn city(&self, _id: &DocumentId) -> Result<Option<City>> {
        Err(failure())
    }

    async fn country(&self, _id: &DocumentId) -> Result<Option<Country>> {
        Err(failure())
    }

    async fn country_by_iso_code(&self, _code: &IsoCode) -> Result<Option<Country>> {
        Err(failure())
    }
}

/// Panics on any call. Used to prove a request is rejected before the store.
struct UnreachableRepository;

#[async_trait]
impl TravelRepository for UnreachableRepository {
    async fn search_hotels(&self, _query: &str) -> Result<Vec<Hotel>> {
        unreachable!("search_hotels called")
    }

    async fn search_cities(&self, _query: &str) -> Result<Vec<City>> {
        unreachable!("search_cities called")
    }

    async fn search_countries(&self, _query: &str) -> Result<Vec<Country>> {
        unreachable!("search_countries called")
    }

    async fn hotel(&self, _id: &DocumentId) -> Result<Option<Hotel>> {
        unreachable!("hotel called")
    }

    async fn city(&self, _id: &DocumentId) -> Result<Option<City>> {
        unreachable!("city called")
    }

    async fn country(&self, _id: &DocumentId) -> Result<Option<Country>> {
        unreachable!("country called")
    }

    async fn country_by_iso_code(&self, _code: &IsoCode) -> Result<Option<Country>> {
        unreachable!("country_by_iso_code called")
    }
}
