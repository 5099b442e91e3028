//! Real central Helsinki locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Transit stops are real HSL stops
//! so fixture itineraries stay geographically plausible.

use nightlife_planner::place::{GeoPoint, Place, PlaceName, Tag};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

// ============================================================================
// Bars and nightlife
// ============================================================================

pub const BARS: &[Location] = &[
    Location::new("Bar Loose", 60.16733, 24.93817),
    Location::new("Kaivohuone", 60.15835, 24.95560),
    Location::new("St. Urho's Pub", 60.17102, 24.93300),
    Location::new("Ateljee Bar", 60.16851, 24.93910),
    Location::new("Storyville", 60.17233, 24.93289),
];

// ============================================================================
// Pizza places
// ============================================================================

pub const PIZZERIAS: &[Location] = &[
    Location::new("Pizzeria Luca", 60.16879, 24.94096),
    Location::new("Putte's Bar & Pizza", 60.16716, 24.93589),
    Location::new("Skiffer Erottaja", 60.16598, 24.94528),
];

// ============================================================================
// HSL transit stops (good leg endpoints)
// ============================================================================

pub const TRANSIT_STOPS: &[Location] = &[
    Location::new("Rautatientori", 60.17132, 24.94244),
    Location::new("Kamppi", 60.16894, 24.93158),
    Location::new("Lasipalatsi", 60.17031, 24.93643),
    Location::new("Ylioppilastalo", 60.16930, 24.94077),
    Location::new("Kauppatori", 60.16755, 24.95220),
];

/// Builds a [`Place`] fixture with the given tags.
pub fn place(location: &Location, tags: &[&str]) -> Place {
    Place {
        id: format!("fixture:{}", location.name.to_lowercase().replace(' ', "-")),
        name: PlaceName {
            fi: Some(location.name.to_string()),
            en: None,
            sv: None,
        },
        info_url: None,
        location: GeoPoint {
            lat: location.lat,
            lon: location.lon,
        },
        description: None,
        tags: tags
            .iter()
            .map(|tag| Tag {
                id: format!("fixture:{}", tag),
                name: tag.to_string(),
            })
            .collect(),
    }
}
