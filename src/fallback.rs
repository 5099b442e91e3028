//! Bundled fallback place data (used when the places API is unreachable).
//!
//! A handful of well-known central Helsinki spots so the map is never empty.
//! Coordinates from OpenStreetMap.

use tracing::debug;

use crate::place::{GeoPoint, Place, PlaceName, Tag};
use crate::traits::PlaceSource;

/// In-memory place source backed by a fixed list.
///
/// Queries filter the list by tag name, matching the upstream `tags_search`
/// semantics closely enough for offline use.
#[derive(Debug, Clone, Default)]
pub struct StaticPlaces {
    places: Vec<Place>,
}

impl StaticPlaces {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    /// The bundled bar/nightlife fallback set.
    pub fn bars() -> Self {
        Self::new(vec![
            fallback_place(
                "fallback:bar-loose",
                "Bar Loose",
                (60.16733, 24.93817),
                &["BARS & NIGHTLIFE", "Bar", "Rock", "LiveMusic"],
            ),
            fallback_place(
                "fallback:kaivohuone",
                "Kaivohuone",
                (60.15835, 24.95560),
                &["BARS & NIGHTLIFE", "Nightclub"],
            ),
            fallback_place(
                "fallback:st-urhos-pub",
                "St. Urho's Pub",
                (60.17102, 24.93300),
                &["BARS & NIGHTLIFE", "Pub", "Beer"],
            ),
            fallback_place(
                "fallback:erottaja-bar",
                "Erottaja Bar",
                (60.16682, 24.94474),
                &["BARS & NIGHTLIFE", "Bar"],
            ),
        ])
    }

    /// The bundled pizza fallback set.
    pub fn pizzas() -> Self {
        Self::new(vec![
            fallback_place(
                "fallback:pizzeria-luca",
                "Pizzeria Luca",
                (60.16879, 24.94096),
                &["Pizza", "Restaurants"],
            ),
            fallback_place(
                "fallback:putte's",
                "Putte's Bar & Pizza",
                (60.16716, 24.93589),
                &["Pizza", "Bar"],
            ),
            fallback_place(
                "fallback:skiffer",
                "Skiffer Erottaja",
                (60.16598, 24.94528),
                &["Pizza", "Restaurants"],
            ),
        ])
    }
}

impl PlaceSource for StaticPlaces {
    fn places_tagged(&self, tags_search: &str) -> Vec<Place> {
        self.places
            .iter()
            .filter(|place| place.has_tag(tags_search))
            .cloned()
            .collect()
    }
}

/// Serves the fallback source whenever the primary comes back empty.
///
/// The primary reports failure as an empty list, so an empty-but-healthy
/// primary also falls back; for the place queries this crate makes, an empty
/// city-wide tag search means the API is misbehaving anyway.
#[derive(Debug, Clone)]
pub struct FallbackPlaces<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackPlaces<P, F>
where
    P: PlaceSource,
    F: PlaceSource,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> PlaceSource for FallbackPlaces<P, F>
where
    P: PlaceSource,
    F: PlaceSource,
{
    fn places_tagged(&self, tags_search: &str) -> Vec<Place> {
        let places = self.primary.places_tagged(tags_search);
        if !places.is_empty() {
            return places;
        }
        debug!(%tags_search, "primary place source empty, using fallback data");
        self.fallback.places_tagged(tags_search)
    }
}

fn fallback_place(id: &str, name: &str, coords: (f64, f64), tags: &[&str]) -> Place {
    Place {
        id: id.to_string(),
        name: PlaceName {
            fi: Some(name.to_string()),
            en: None,
            sv: None,
        },
        info_url: None,
        location: GeoPoint {
            lat: coords.0,
            lon: coords.1,
        },
        description: None,
        tags: tags
            .iter()
            .map(|tag| Tag {
                id: format!("fallback:{}", tag),
                name: tag.to_string(),
            })
            .collect(),
    }
}
