//! Place (point-of-interest) model and filtering.
//!
//! Mirrors the MyHelsinki places API response shape: localized names, a
//! coordinate, an info link, a free-text description, and a tag list. Tag
//! and name filtering drive which markers the map layer shows.

use serde::{Deserialize, Serialize};

/// A bar, pizzeria, or other point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: PlaceName,
    #[serde(default)]
    pub info_url: Option<String>,
    pub location: GeoPoint,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Localized place names. Finnish is the primary variant in the source data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceName {
    #[serde(default)]
    pub fi: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub sv: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// How a multi-tag filter combines its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMatch {
    /// Keep places carrying at least one of the tags (inclusive query).
    Any,
    /// Keep places carrying every tag (exclusive query).
    All,
}

impl Place {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.name == tag)
    }

    /// Case-insensitive substring match against any name variant.
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.name.fi, &self.name.en, &self.name.sv]
            .into_iter()
            .flatten()
            .any(|name| name.to_lowercase().contains(&query))
    }

    /// Display name, preferring the Finnish variant.
    pub fn display_name(&self) -> &str {
        [&self.name.fi, &self.name.en, &self.name.sv]
            .into_iter()
            .flatten()
            .next()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.location.lat, self.location.lon)
    }
}

/// Filters places by tag names.
///
/// `TagMatch::Any` keeps a place when any listed tag is present,
/// `TagMatch::All` only when every listed tag is.
pub fn filter_by_tags(places: Vec<Place>, tags: &[&str], mode: TagMatch) -> Vec<Place> {
    places
        .into_iter()
        .filter(|place| match mode {
            TagMatch::Any => tags.iter().any(|tag| place.has_tag(tag)),
            TagMatch::All => tags.iter().all(|tag| place.has_tag(tag)),
        })
        .collect()
}

/// Filters places whose name matches the search-box query.
pub fn filter_by_name(places: Vec<Place>, query: &str) -> Vec<Place> {
    places
        .into_iter()
        .filter(|place| place.matches_name(query))
        .collect()
}
