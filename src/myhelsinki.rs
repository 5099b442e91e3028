//! MyHelsinki open-api HTTP adapter for places.

use serde::Deserialize;
use tracing::warn;

use crate::place::Place;
use crate::traits::PlaceSource;

/// Tag query matching the bar and nightlife places.
pub const NIGHTLIFE_TAGS: &str = "BARS & NIGHTLIFE";

/// Tag query matching pizza places.
pub const PIZZA_TAGS: &str = "Pizza";

#[derive(Debug, Clone)]
pub struct MyHelsinkiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for MyHelsinkiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://open-api.myhelsinki.fi/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MyHelsinkiClient {
    config: MyHelsinkiConfig,
    client: reqwest::blocking::Client,
}

impl MyHelsinkiClient {
    pub fn new(config: MyHelsinkiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// All bar and nightlife places.
    pub fn nightlife(&self) -> Vec<Place> {
        self.places_tagged(NIGHTLIFE_TAGS)
    }

    /// All pizza places.
    pub fn pizza(&self) -> Vec<Place> {
        self.places_tagged(PIZZA_TAGS)
    }
}

impl PlaceSource for MyHelsinkiClient {
    fn places_tagged(&self, tags_search: &str) -> Vec<Place> {
        let url = format!("{}/places/", self.config.base_url);

        let response = self
            .client
            .get(url)
            .query(&[("tags_search", tags_search)])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<PlacesResponse>());

        match response {
            // Tags and meta are dropped; only the place list matters here.
            Ok(body) => body.data,
            Err(err) => {
                warn!(%tags_search, error = %err, "places request failed");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    data: Vec<Place>,
}
