use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document, Regex},
    Client, Collection, Database,
};
use serde::Deserialize;
use travel_model::{City, Country, DocumentId, Hotel, IsoCode};

use super::repo_error::RepositoryError;
use super::travel_repo::{Result, TravelRepository};

const HOTELS: &str = "hotels";
const CITIES: &str = "cities";
const COUNTRIES: &str = "countries";

#[derive(Debug, Deserialize)]
struct HotelDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    chain_name: String,
    hotel_name: String,
    city: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct CityDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CountryDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    country: String,
    countryisocode: String,
}

fn document_id(collection: &'static str, id: ObjectId) -> Result<DocumentId> {
    DocumentId::parse(&id.to_hex()).map_err(|err| RepositoryError::MalformedDocument {
        collection,
        message: err.to_string(),
    })
}

impl TryFrom<HotelDocument> for Hotel {
    type Error = RepositoryError;

    fn try_from(doc: HotelDocument) -> Result<Self> {
        Ok(Self {
            id: document_id(HOTELS, doc.id)?,
            chain_name: doc.chain_name,
            hotel_name: doc.hotel_name,
            city: doc.city,
            country: doc.country,
        })
    }
}

impl TryFrom<CityDocument> for City {
    type Error = RepositoryError;

    fn try_from(doc: CityDocument) -> Result<Self> {
        Ok(Self {
            id: document_id(CITIES, doc.id)?,
            name: doc.name,
        })
    }
}

impl TryFrom<CountryDocument> for Country {
    type Error = RepositoryError;

    fn try_from(doc: CountryDocument) -> Result<Self> {
        let iso_code =
            IsoCode::parse(&doc.countryisocode).map_err(|err| RepositoryError::MalformedDocument {
                collection: COUNTRIES,
                message: err.to_string(),
            })?;

        Ok(Self {
            id: document_id(COUNTRIES, doc.id)?,
            country: doc.country,
            iso_code,
        })
    }
}

/// Builds a filter matching documents where any of `fields` contains `query`,
/// ignoring case. The query is escaped so it always matches literally.
fn contains_filter(fields: &[&str], query: &str) -> Document {
    let pattern = Regex {
        pattern: regex::escape(query),
        options: "i".to_string(),
    };

    let mut clauses: Vec<Document> = fields
        .iter()
        .map(|field| {
            let mut clause = Document::new();
            clause.insert(*field, Bson::RegularExpression(pattern.clone()));
            clause
        })
        .collect();

    if clauses.len() == 1 {
        clauses.remove(0)
    } else {
        doc! { "$or": clauses }
    }
}

fn by_id(id: &DocumentId) -> Result<Document> {
    let oid = ObjectId::parse_str(id.as_str())?;
    Ok(doc! { "_id": oid })
}

/// MongoDB-backed repository. The driver pools connections internally, so a
/// single instance is shared by all requests.
#[derive(Clone)]
pub struct MongoTravelRepository {
    database: Database,
}

impl MongoTravelRepository {
    /// Connects to `url`, using the database named in the connection string
    /// or `default_database` when it names none.
    pub async fn connect(url: &str, default_database: &str) -> Result<Self> {
        let client = Client::with_uri_str(url).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(default_database));

        match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => tracing::info!("Connected to MongoDB database '{}'", database.name()),
            Err(err) => tracing::warn!(
                "MongoDB database '{}' is not reachable yet: {}",
                database.name(),
                err
            ),
        }

        Ok(Self { database })
    }

    fn hotels(&self) -> Collection<HotelDocument> {
        self.database.collection(HOTELS)
    }

    fn cities(&self) -> Collection<CityDocument> {
        self.database.collection(CITIES)
    }

    fn countries(&self) -> Collection<CountryDocument> {
        self.database.collection(COUNTRIES)
    }
}

async fn find_all<D, T>(collection: Collection<D>, filter: Document) -> Result<Vec<T>>
where
    D: serde::de::DeserializeOwned + Unpin + Send + Sync,
    T: TryFrom<D, Error = RepositoryError>,
{
    let documents: Vec<D> = collection.find(filter).await?.try_collect().await?;
    Ok(convert_matches(documents))
}

/// Converts search matches, logging and skipping documents that do not fit
/// the model instead of failing the whole search.
fn convert_matches<D, T>(documents: Vec<D>) -> Vec<T>
where
    T: TryFrom<D, Error = RepositoryError>,
{
    documents
        .into_iter()
        .filter_map(|document| match T::try_from(document) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!("Skipping malformed search match: {}", err);
                None
            }
        })
        .collect()
}

async fn find_one<D, T>(collection: Collection<D>, filter: Document) -> Result<Option<T>>
where
    D: serde::de::DeserializeOwned + Unpin + Send + Sync,
    T: TryFrom<D, Error = RepositoryError>,
{
    collection
        .find_one(filter)
        .await?
        .map(T::try_from)
        .transpose()
}

#[async_trait]
impl TravelRepository for MongoTravelRepository {
    async fn search_hotels(&self, query: &str) -> Result<Vec<Hotel>> {
        let filter = contains_filter(&["hotel_name", "city", "country"], query);
        find_all(self.hotels(), filter).await
    }

    async fn search_cities(&self, query: &str) -> Result<Vec<City>> {
        find_all(self.cities(), contains_filter(&["name"], query)).await
    }

    async fn search_countries(&self, query: &str) -> Result<Vec<Country>> {
        find_all(self.countries(), contains_filter(&["country"], query)).await
    }

    async fn hotel(&self, id: &DocumentId) -> Result<Option<Hotel>> {
        find_one(self.hotels(), by_id(id)?).await
    }

    async fn city(&self, id: &DocumentId) -> Result<Option<City>> {
        find_one(self.cities(), by_id(id)?).await
    }

    async fn country(&self, id: &DocumentId) -> Result<Option<Country>> {
        find_one(self.countries(), by_id(id)?).await
    }

    async fn country_by_iso_code(&self, code: &IsoCode) -> Result<Option<Country>> {
        find_one(self.countries(), doc! { "countryisocode": code.as_str() }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex_of(value: &Bson) -> &Regex {
        match value {
            Bson::RegularExpression(regex) => regex,
            other => panic!("expected regex, got {other:?}"),
        }
    }

    #[test]
    fn single_field_filter_is_a_plain_clause() {
        let filter = contains_filter(&["name"], "Paris");
        let regex = regex_of(filter.get("name").unwrap());
        assert_eq!(regex.pattern, "Paris");
        assert_eq!(regex.options, "i");
        assert!(filter.get("$or").is_none());
    }

    #[test]
    fn multi_field_filter_ors_every_field() {
        let filter = contains_filter(&["hotel_name", "city", "country"], "par");
        let clauses = filter.get_array("$or").unwrap();
        let fields: Vec<&str> = clauses
            .iter()
            .map(|clause| {
                let clause = clause.as_document().unwrap();
                assert_eq!(regex_of(clause.iter().next().unwrap().1).pattern, "par");
                clause.keys().next().unwrap().as_str()
            })
            .collect();
        assert_eq!(fields, ["hotel_name", "city", "country"]);
    }

    #[test]
    fn metacharacters_are_escaped() {
        let filter = contains_filter(&["name"], "St. (Moritz)*");
        let regex = regex_of(filter.get("name").unwrap());
        assert_eq!(regex.pattern, r"St\. \(Moritz\)\*");
    }

    #[test]
    fn id_filter_uses_object_id() {
        let id = DocumentId::parse("65f1c0ffee0000000000abcd").unwrap();
        let filter = by_id(&id).unwrap();
        assert_eq!(
            filter.get_object_id("_id").unwrap().to_hex(),
            "65f1c0ffee0000000000abcd"
        );
    }

    #[test]
    fn country_document_with_bad_iso_code_is_malformed() {
        let doc = CountryDocument {
            id: ObjectId::new(),
            country: "Nowhere".to_string(),
            countryisocode: "NOWHERE".to_string(),
        };
        let err = Country::try_from(doc).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::MalformedDocument {
                collection: COUNTRIES,
                ..
            }
        ));
    }

    #[test]
    fn malformed_search_match_is_skipped() {
        let good = CountryDocument {
            id: ObjectId::new(),
            country: "France".to_string(),
            countryisocode: "fr".to_string(),
        };
        let bad = CountryDocument {
            id: ObjectId::new(),
            country: "Francia".to_string(),
            countryisocode: "FRA".to_string(),
        };

        let countries: Vec<Country> = convert_matches(vec![bad, good]);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].country, "France");
        assert_eq!(countries[0].iso_code.as_str(), "FR");
    }
}
