//! Geolocation port - abstracts the device position lookup

use anyhow::Result;
use async_trait::async_trait;

use crate::geo::Coordinate;

/// One-shot device geolocation lookup.
///
/// The future may fail (permission denied) or simply never resolve; callers
/// must not block screen entry on it.
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate>;
}
