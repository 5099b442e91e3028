//! Transit itinerary model (trip-planning API response side).
//!
//! Covers what the route panel needs from a planned trip: per-leg travel
//! mode, timing, endpoints, intermediate stop counts, and the encoded leg
//! geometry that gets decoded right before a leg is drawn on the map.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Deserialize;

use crate::haversine;
use crate::polyline::{self, MalformedPolylineError, Polyline};

/// Travel mode of a single leg.
///
/// `Other` absorbs modes the app has no styling for (e.g. airport legs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Walk,
    Bus,
    Tram,
    Subway,
    Rail,
    Ferry,
    #[serde(other)]
    Other,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub mode: TravelMode,
    /// Departure time, unix epoch milliseconds.
    pub start_time: i64,
    /// Arrival time, unix epoch milliseconds.
    pub end_time: i64,
    pub from: LegEndpoint,
    pub to: LegEndpoint,
    /// Stops passed without alighting. The API sends null for walk legs.
    #[serde(default)]
    pub intermediate_stops: Option<Vec<LegEndpoint>>,
    pub leg_geometry: LegGeometry,
}

/// A named point where a leg starts, stops, or ends.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegEndpoint {
    #[serde(default)]
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// Encoded route geometry as delivered by the routing API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegGeometry {
    pub points: String,
}

impl Leg {
    /// Decodes this leg's geometry for drawing.
    pub fn path(&self) -> Result<Polyline, MalformedPolylineError> {
        polyline::decode(&self.leg_geometry.points)
    }

    pub fn duration_secs(&self) -> i64 {
        (self.end_time - self.start_time) / 1000
    }

    pub fn stop_count(&self) -> usize {
        self.intermediate_stops.as_ref().map_or(0, Vec::len)
    }

    /// Straight-line walking distance estimate between the leg endpoints.
    pub fn walk_distance_km(&self) -> f64 {
        haversine::distance_km((self.from.lat, self.from.lon), (self.to.lat, self.to.lon))
    }

    /// Short detail string for the leg list: stop count for transit legs,
    /// distance for walking legs.
    pub fn detail_label(&self) -> Option<String> {
        match self.stop_count() {
            0 if self.mode == TravelMode::Walk => {
                Some(haversine::format_distance(self.walk_distance_km()))
            }
            0 => None,
            1 => Some("1 stop".to_string()),
            n => Some(format!("{} stops", n)),
        }
    }
}

/// One planned trip from origin to destination.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// Departure time of the first leg, epoch milliseconds.
    pub fn departs_at(&self) -> Option<i64> {
        self.legs.first().map(|leg| leg.start_time)
    }

    /// Arrival time of the last leg, epoch milliseconds.
    pub fn arrives_at(&self) -> Option<i64> {
        self.legs.last().map(|leg| leg.end_time)
    }

    pub fn duration_secs(&self) -> i64 {
        match (self.departs_at(), self.arrives_at()) {
            (Some(start), Some(end)) => (end - start) / 1000,
            _ => 0,
        }
    }

    /// Distinct non-walk modes in travel order, or `[Walk]` when the whole
    /// trip is on foot. This is the route-list summary ("Bus, Tram").
    pub fn modes(&self) -> Vec<TravelMode> {
        let mut modes = Vec::new();
        for leg in &self.legs {
            if leg.mode != TravelMode::Walk && !modes.contains(&leg.mode) {
                modes.push(leg.mode);
            }
        }
        if modes.is_empty() {
            modes.push(TravelMode::Walk);
        }
        modes
    }

    pub fn is_walk_only(&self) -> bool {
        self.modes() == [TravelMode::Walk]
    }

    /// Orders itineraries by arrival time, earliest first. Itineraries with
    /// no legs sort last.
    pub fn cmp_by_arrival(a: &Itinerary, b: &Itinerary) -> Ordering {
        match (a.arrives_at(), b.arrives_at()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Decodes every leg geometry of an itinerary, legs in parallel.
///
/// Fails on the first malformed geometry; on success the result has one
/// polyline per leg, in leg order.
pub fn decode_paths(itinerary: &Itinerary) -> Result<Vec<Polyline>, MalformedPolylineError> {
    itinerary.legs.par_iter().map(Leg::path).collect()
}

/// Reply envelope of the trip-planning API.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanResponse {
    pub data: PlanData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanData {
    pub plan: Plan,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    pub itineraries: Vec<Itinerary>,
}

impl PlanResponse {
    /// Extracts the planned itineraries sorted by arrival time, optionally
    /// dropping trips that never leave the sidewalk.
    pub fn into_itineraries(self, ignore_walk_only: bool) -> Vec<Itinerary> {
        let mut itineraries = self.data.plan.itineraries;
        if ignore_walk_only {
            itineraries.retain(|itinerary| !itinerary.is_walk_only());
        }
        itineraries.sort_by(Itinerary::cmp_by_arrival);
        itineraries
    }
}
