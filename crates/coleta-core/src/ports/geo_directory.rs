//! Geographic directory port - abstracts the official UF/city catalogs

use anyhow::Result;
use async_trait::async_trait;

/// Read access to the official geographic catalogs.
///
/// Options are plain display strings: the 2-letter UF code and the city
/// name are themselves the selection keys carried into the outbound record.
#[async_trait]
pub trait GeoDirectoryPort: Send + Sync {
    /// List all UF codes, in the service's order.
    async fn list_ufs(&self) -> Result<Vec<String>>;

    /// List city names for one UF, in the service's order.
    async fn list_cities(&self, uf: &str) -> Result<Vec<String>>;
}
