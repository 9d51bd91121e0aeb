//! Item catalog port - abstracts the catalog read service

use anyhow::Result;
use async_trait::async_trait;

use crate::catalog::CollectionItem;

/// Read access to the collection item catalog.
///
/// Queried once per registration screen; the returned order is the display
/// order of the item grid.
#[async_trait]
pub trait ItemCatalogPort: Send + Sync {
    async fn list_items(&self) -> Result<Vec<CollectionItem>>;
}
