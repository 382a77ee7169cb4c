use serde::{Deserialize, Serialize};

use crate::ids::{DocumentId, IsoCode};

/// A hotel as served by `GET /hotels/:id` and listed by `GET /search`.
///
/// City and country are stored by name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub chain_name: String,
    pub hotel_name: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Display name, e.g. "France".
    pub country: String,
    #[serde(rename = "countryisocode")]
    pub iso_code: IsoCode,
}

/// Response body of `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub hotels: Vec<Hotel>,
    pub cities: Vec<City>,
    pub countries: Vec<Country>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty() && self.cities.is_empty() && self.countries.is_empty()
    }
}

/// JSON body of every non-success API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
