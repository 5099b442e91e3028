//! Test fixtures for nightlife-planner.
//!
//! Provides realistic test data:
//! - Real central Helsinki bars, pizzerias, and HSL stops (from OpenStreetMap)
//! - A builder for trip-planning API response JSON

pub mod helsinki_locations;
pub mod plan_response;

pub use helsinki_locations::*;
pub use plan_response::*;
