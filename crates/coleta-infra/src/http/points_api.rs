//! Backend API client (item catalog + collection-point creation).

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use coleta_core::catalog::CollectionItem;
use coleta_core::ports::{CollectionPointPort, ItemCatalogPort};
use coleta_core::registration::NewCollectionPoint;

/// HTTP client over the Coleta backend API.
///
/// Implements both backend-facing ports: `GET /items` for the catalog and
/// `POST /points` for creation.
pub struct PointsApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PointsApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ItemCatalogPort for PointsApiClient {
    async fn list_items(&self) -> Result<Vec<CollectionItem>> {
        let items = self
            .http
            .get(format!("{}/items", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CollectionItem>>()
            .await?;
        Ok(items)
    }
}

#[async_trait]
impl CollectionPointPort for PointsApiClient {
    async fn create(&self, point: &NewCollectionPoint) -> Result<()> {
        debug!(name = %point.name, uf = %point.uf, "creating collection point");
        self.http
            .post(format!("{}/points", self.base_url))
            .json(point)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
