//! nightlife-planner data layer
//!
//! Place (bar/pizza) lookup with offline fallback, transit itinerary
//! processing, and the encoded-polyline codec for route geometries.

pub mod traits;
pub mod polyline;
pub mod place;
pub mod myhelsinki;
pub mod fallback;
pub mod itinerary;
pub mod haversine;
