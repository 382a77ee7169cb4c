//! Read-only access to the `hotels`, `cities` and `countries` collections.

use async_trait::async_trait;
use travel_model::{City, Country, DocumentId, Hotel, IsoCode};

use super::repo_error::RepositoryError;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Data-store handle shared by every request handler.
///
/// Search methods match case-insensitively on a literal substring and return
/// documents in store order.
#[async_trait]
pub trait TravelRepository: Send + Sync {
    /// Hotels whose name, city or country contains `query`.
    async fn search_hotels(&self, query: &str) -> Result<Vec<Hotel>>;

    /// Cities whose name contains `query`.
    async fn search_cities(&self, query: &str) -> Result<Vec<City>>;

    /// Countries whose name contains `query`.
    async fn search_countries(&self, query: &str) -> Result<Vec<Country>>;

    async fn hotel(&self, id: &DocumentId) -> Result<Option<Hotel>>;

    async fn city(&self, id: &DocumentId) -> Result<Option<City>>;

    async fn country(&self, id: &DocumentId) -> Result<Option<Country>>;

    async fn country_by_iso_code(&self, code: &IsoCode) -> Result<Option<Country>>;
}
