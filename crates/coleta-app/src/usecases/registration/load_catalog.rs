use std::sync::Arc;

use tracing::warn;

use coleta_core::catalog::CollectionItem;
use coleta_core::ports::ItemCatalogPort;

/// Use case for loading the collection item catalog.
///
/// Runs once per registration screen. A fetch failure is swallowed: the
/// grid simply stays empty and the failure is only logged.
pub struct LoadCatalog {
    catalog: Arc<dyn ItemCatalogPort>,
}

impl LoadCatalog {
    pub fn new(catalog: Arc<dyn ItemCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> Vec<CollectionItem> {
        match self.catalog.list_items().await {
            Ok(items) => items,
            Err(error) => {
                warn!("item catalog fetch failed, leaving the grid empty: {error:#}");
                Vec::new()
            }
        }
    }
}
