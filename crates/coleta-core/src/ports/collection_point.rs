//! Collection point port - abstracts the creation service

use anyhow::Result;
use async_trait::async_trait;

use crate::registration::NewCollectionPoint;

/// Single-shot write access to the collection-point creation service.
///
/// Only success/failure is consumed; no response body is read. The service
/// has no idempotency key, so a resubmission creates a second record.
#[async_trait]
pub trait CollectionPointPort: Send + Sync {
    async fn create(&self, point: &NewCollectionPoint) -> Result<()>;
}
