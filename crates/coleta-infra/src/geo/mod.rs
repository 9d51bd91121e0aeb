//! Geolocation adapters.
//!
//! Real device geolocation lives in the platform shell; this module only
//! provides the fixed-position adapter used headless and in tests.

use anyhow::Result;
use async_trait::async_trait;

use coleta_core::geo::Coordinate;
use coleta_core::ports::GeolocationPort;

/// Geolocation source that always reports the same coordinate.
pub struct StaticGeolocation {
    position: Coordinate,
}

impl StaticGeolocation {
    pub fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationPort for StaticGeolocation {
    async fn current_position(&self) -> Result<Coordinate> {
        Ok(self.position)
    }
}
