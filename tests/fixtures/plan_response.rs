//! Builders for trip-planning API response JSON.
//!
//! Produces the `data.plan.itineraries` envelope the routing API replies
//! with, including encoded leg geometries, so tests exercise the same
//! deserialize-then-decode path as production.

use nightlife_planner::polyline;
use serde_json::{json, Value};

use super::helsinki_locations::Location;

/// One leg as response JSON. The geometry runs from `from` through the
/// intermediate stops to `to`; walk legs pass `None` for stops (the API
/// sends null there).
pub fn leg_json(
    mode: &str,
    start_time: i64,
    end_time: i64,
    from: &Location,
    to: &Location,
    stops: Option<&[Location]>,
) -> Value {
    let mut path = vec![from.coords()];
    if let Some(stops) = stops {
        path.extend(stops.iter().map(Location::coords));
    }
    path.push(to.coords());

    json!({
        "mode": mode,
        "startTime": start_time,
        "endTime": end_time,
        "from": endpoint_json(from),
        "to": endpoint_json(to),
        "intermediateStops": stops.map(|stops| {
            stops.iter().map(endpoint_json).collect::<Vec<_>>()
        }),
        "legGeometry": { "points": polyline::encode(&path) },
    })
}

pub fn itinerary_json(legs: Vec<Value>) -> Value {
    json!({ "legs": legs })
}

/// The full reply envelope as a JSON string.
pub fn plan_json(itineraries: Vec<Value>) -> String {
    json!({ "data": { "plan": { "itineraries": itineraries } } }).to_string()
}

fn endpoint_json(location: &Location) -> Value {
    json!({ "name": location.name, "lat": location.lat, "lon": location.lon })
}
