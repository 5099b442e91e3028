//! Encoded-polyline codec for route geometries.
//!
//! Implements the Google encoded-polyline algorithm used by the transit
//! routing API for leg geometries: coordinates quantized to 1e-5 degrees,
//! delta-encoded per axis, zig-zag sign folded, and packed into 5-bit
//! little-endian chunks offset into printable ASCII (63..=126).
//!
//! Encoding/decoding happens at the boundary (when receiving geometry from
//! the routing API or producing it for another consumer); internal code
//! works with decoded [`Polyline`] points.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bit mask for the 5 payload bits of a chunk.
const PAYLOAD_MASK: i64 = 0x1f;

/// Continuation bit: set on every chunk except the last one of a value.
const CONTINUATION_BIT: i64 = 0x20;

/// Offset that maps chunk values into printable ASCII.
const CHAR_OFFSET: u8 = 0x3f;

/// Quantization scale: 1e-5 degrees per integer step (~1.1 m at the equator).
const SCALE: f64 = 1e5;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Encodes the polyline into the compact string form.
    pub fn to_encoded(&self) -> String {
        encode(&self.points)
    }

    /// Decodes an encoded-polyline string.
    pub fn from_encoded(encoded: &str) -> Result<Self, MalformedPolylineError> {
        decode(encoded)
    }
}

/// Error raised when an encoded string does not follow the chunk grammar.
///
/// Well-formed input never produces this; it indicates a truncated or
/// corrupted geometry string from the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolylineError {
    /// The input ended in the middle of a value (or after a latitude with no
    /// matching longitude).
    Truncated { offset: usize },
    /// A byte outside the printable chunk range 63..=126.
    InvalidCharacter { offset: usize, byte: u8 },
}

impl fmt::Display for MalformedPolylineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPolylineError::Truncated { offset } => {
                write!(f, "encoded polyline truncated at byte {}", offset)
            }
            MalformedPolylineError::InvalidCharacter { offset, byte } => {
                write!(
                    f,
                    "invalid encoded polyline byte 0x{:02x} at offset {}",
                    byte, offset
                )
            }
        }
    }
}

impl std::error::Error for MalformedPolylineError {}

/// Encodes (latitude, longitude) points into an encoded-polyline string.
///
/// Coordinates are rounded to the nearest 1e-5 degree; finer precision does
/// not survive a round-trip. An empty slice yields an empty string.
pub fn encode(points: &[(f64, f64)]) -> String {
    let mut encoded = String::new();
    let mut last_lat: i64 = 0;
    let mut last_lon: i64 = 0;

    for &(lat, lon) in points {
        let lat = (lat * SCALE).round() as i64;
        let lon = (lon * SCALE).round() as i64;

        encode_value(&mut encoded, lat - last_lat);
        encode_value(&mut encoded, lon - last_lon);

        last_lat = lat;
        last_lon = lon;
    }

    encoded
}

/// Decodes an encoded-polyline string into its coordinate points.
///
/// Each call starts fresh at (0, 0); no state is shared between calls. An
/// empty string yields an empty polyline. Reading stops exactly at the last
/// chunk of the last value; input that runs out mid-value or contains a byte
/// outside the chunk alphabet is rejected.
pub fn decode(encoded: &str) -> Result<Polyline, MalformedPolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while index < bytes.len() {
        lat += decode_value(bytes, &mut index)?;
        lon += decode_value(bytes, &mut index)?;
        points.push((lat as f64 / SCALE, lon as f64 / SCALE));
    }

    Ok(Polyline::new(points))
}

/// Appends one zig-zag folded delta as little-endian 5-bit chunks.
fn encode_value(encoded: &mut String, value: i64) {
    // Fold the sign into bit 0: negatives become odd magnitudes.
    let mut chunk = if value < 0 {
        !(value << 1)
    } else {
        value << 1
    };

    while chunk >= CONTINUATION_BIT {
        encoded.push(((CONTINUATION_BIT | (chunk & PAYLOAD_MASK)) as u8 + CHAR_OFFSET) as char);
        chunk >>= 5;
    }
    // Final chunk carries no continuation bit.
    encoded.push((chunk as u8 + CHAR_OFFSET) as char);
}

/// Reads one value's chunks starting at `*index` and returns the signed delta.
///
/// Advances `*index` past exactly the chunks consumed, stopping at the first
/// chunk whose continuation bit is clear.
fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, MalformedPolylineError> {
    let mut sum: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = match bytes.get(*index) {
            Some(&byte) => byte,
            None => return Err(MalformedPolylineError::Truncated { offset: *index }),
        };
        if !(CHAR_OFFSET..=126).contains(&byte) {
            return Err(MalformedPolylineError::InvalidCharacter {
                offset: *index,
                byte,
            });
        }
        *index += 1;

        let chunk = (byte - CHAR_OFFSET) as i64;
        sum |= (chunk & PAYLOAD_MASK) << shift;
        shift += 5;

        if chunk < CONTINUATION_BIT {
            break;
        }
    }

    // Unfold the zig-zag: odd sums are negative.
    if sum & 1 == 1 {
        Ok(!(sum >> 1))
    } else {
        Ok(sum >> 1)
    }
}
