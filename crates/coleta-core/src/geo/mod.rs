//! Geographic primitives.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as delivered by the map widget or the device
/// geolocation lookup.
///
/// A coordinate is only ever replaced wholesale; there is no per-axis update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// The placeholder coordinate used before any click or geolocation fix.
    pub const ORIGIN: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}
