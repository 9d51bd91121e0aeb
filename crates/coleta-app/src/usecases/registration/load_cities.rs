use std::sync::Arc;

use tracing::warn;

use coleta_core::ports::GeoDirectoryPort;
use coleta_core::registration::NOT_SELECTED;

/// Use case for loading the city list of one UF.
///
/// The sentinel UF issues no request at all and yields an empty list.
/// A fetch failure is swallowed into an empty list, same as the other
/// option loads.
pub struct LoadCities {
    geo: Arc<dyn GeoDirectoryPort>,
}

impl LoadCities {
    pub fn new(geo: Arc<dyn GeoDirectoryPort>) -> Self {
        Self { geo }
    }

    pub async fn execute(&self, uf: &str) -> Vec<String> {
        if uf == NOT_SELECTED {
            return Vec::new();
        }
        match self.geo.list_cities(uf).await {
            Ok(cities) => cities,
            Err(error) => {
                warn!(uf, "city list fetch failed, leaving the select empty: {error:#}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct MockGeo {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl GeoDirectoryPort for MockGeo {
        async fn list_ufs(&self) -> anyhow::Result<Vec<String>> {
            unreachable!("not used by this use case")
        }

        async fn list_cities(&self, uf: &str) -> anyhow::Result<Vec<String>> {
            self.calls.lock().unwrap().push(uf.to_string());
            Ok(vec!["São Paulo".into(), "Campinas".into()])
        }
    }

    #[tokio::test]
    async fn scoped_to_the_requested_uf() {
        let geo = Arc::new(MockGeo {
            calls: Mutex::new(Vec::new()),
        });
        let use_case = LoadCities::new(geo.clone());
        let cities = use_case.execute("SP").await;
        assert_eq!(cities, vec!["São Paulo", "Campinas"]);
        assert_eq!(*geo.calls.lock().unwrap(), vec!["SP"]);
    }

    #[tokio::test]
    async fn sentinel_uf_issues_no_request() {
        let geo = Arc::new(MockGeo {
            calls: Mutex::new(Vec::new()),
        });
        let use_case = LoadCities::new(geo.clone());
        assert!(use_case.execute(NOT_SELECTED).await.is_empty());
        assert!(geo.calls.lock().unwrap().is_empty());
    }
}
