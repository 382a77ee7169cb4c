use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use travel_model::{City, Country, Hotel, SearchResults};

/// HTTP client for travel-api. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("Invalid API URL: {}", base_url))?;
        // Relative joins keep a path prefix such as `/api` only behind a trailing slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `path` is relative to the base URL, without a leading slash.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for path {}", path))
    }

    fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut().append_pair("query", query);
        Ok(url)
    }

    fn entity_url(&self, collection: &str, id: &str) -> Result<Url> {
        self.endpoint(&format!("{}/{}", collection, urlencoding::encode(id)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, call_name: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to call {}", call_name))?;

        response
            .error_for_status_ref()
            .with_context(|| format!("{} returned error", call_name))?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {} response", call_name))
    }

    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        self.get_json(self.search_url(query)?, "GET /search").await
    }

    pub async fn hotel(&self, id: &str) -> Result<Hotel> {
        self.get_json(self.entity_url("hotels", id)?, "GET /hotels/:id")
            .await
    }

    pub async fn city(&self, id: &str) -> Result<City> {
        self.get_json(self.entity_url("cities", id)?, "GET /cities/:id")
            .await
    }

    pub async fn country(&self, id: &str) -> Result<Country> {
        self.get_json(self.entity_url("countries", id)?, "GET /countries/:id")
            .await
    }
}
