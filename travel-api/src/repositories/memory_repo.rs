//! In-memory repository for local development and tests.

use async_trait::async_trait;
use serde::Deserialize;
use travel_model::{City, Country, DocumentId, Hotel, IsoCode};

use super::travel_repo::{Result, TravelRepository};

const SEED: &str = include_str!("../../seed/travel.json");

#[derive(Debug, Deserialize)]
struct SeedData {
    hotels: Vec<Hotel>,
    cities: Vec<City>,
    countries: Vec<Country>,
}

/// Repository backed by plain vectors. Insertion order stands in for the
/// store's native order.
#[derive(Debug, Clone)]
pub struct InMemoryTravelRepository {
    hotels: Vec<Hotel>,
    cities: Vec<City>,
    countries: Vec<Country>,
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl InMemoryTravelRepository {
    /// Repository populated with the bundled development dataset.
    pub fn seeded() -> Result<Self> {
        let seed: SeedData = serde_json::from_str(SEED)?;
        Ok(Self {
            hotels: seed.hotels,
            cities: seed.cities,
            countries: seed.countries,
        })
    }
}

#[async_trait]
impl TravelRepository for InMemoryTravelRepository {
    async fn search_hotels(&self, query: &str) -> Result<Vec<Hotel>> {
        let query = query.to_lowercase();
        Ok(self
            .hotels
            .iter()
            .filter(|hotel| {
                contains_ignore_case(&hotel.hotel_name, &query)
                    || contains_ignore_case(&hotel.city, &query)
                    || contains_ignore_case(&hotel.country, &query)
            })
            .cloned()
            .collect())
    }

    async fn search_cities(&self, query: &str) -> Result<Vec<City>> {
        let query = query.to_lowercase();
        Ok(self
            .cities
            .iter()
            .filter(|city| contains_ignore_case(&city.name, &query))
            .cloned()
            .collect())
    }

    async fn search_countries(&self, query: &str) -> Result<Vec<Country>> {
        let query = query.to_lowercase();
        Ok(self
            .countries
            .iter()
            .filter(|country| contains_ignore_case(&country.country, &query))
            .cloned()
            .collect())
    }

    async fn hotel(&self, id: &DocumentId) -> Result<Option<Hotel>> {
        Ok(self.hotels.iter().find(|hotel| &hotel.id == id).cloned())
    }

    async fn city(&self, id: &DocumentId) -> Result<Option<City>> {
        Ok(self.cities.iter().find(|city| &city.id == id).cloned())
    }

    async fn country(&self, id: &DocumentId) -> Result<Option<Country>> {
        Ok(self.countries.iter().find(|country| &country.id == id).cloned())
    }

    async fn country_by_iso_code(&self, code: &IsoCode) -> Result<Option<Country>> {
        Ok(self
            .countries
            .iter()
            .find(|country| &country.iso_code == code)
            .cloned())
    }
}
