use std::sync::Arc;

use tracing::warn;

use coleta_core::ports::GeoDirectoryPort;

/// Use case for loading the UF option list.
///
/// Runs once per registration screen; fail-silent like the catalog load.
pub struct LoadUfs {
    geo: Arc<dyn GeoDirectoryPort>,
}

impl LoadUfs {
    pub fn new(geo: Arc<dyn GeoDirectoryPort>) -> Self {
        Self { geo }
    }

    pub async fn execute(&self) -> Vec<String> {
        match self.geo.list_ufs().await {
            Ok(ufs) => ufs,
            Err(error) => {
                warn!("UF list fetch failed, leaving the select empty: {error:#}");
                Vec::new()
            }
        }
    }
}
