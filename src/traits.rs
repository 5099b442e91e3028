//! Core traits for the planner's data sources.
//!
//! These are intentionally minimal. Concrete adapters (HTTP clients, bundled
//! fallback data) implement them so the presentation layer never depends on
//! where places came from.

use crate::place::Place;

/// Provides points of interest for a tag search.
///
/// `tags_search` is the upstream API's tag query string, e.g.
/// `"BARS & NIGHTLIFE"` or `"Pizza"`. Implementations return an empty Vec
/// when nothing matches or the source is unavailable; distinguishing the two
/// is left to fallback composition.
pub trait PlaceSource {
    fn places_tagged(&self, tags_search: &str) -> Vec<Place>;
}
