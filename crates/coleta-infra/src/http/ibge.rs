//! IBGE localidades API client.
//!
//! The official geographic reference service: `GET /estados` for the UF
//! list and `GET /estados/{uf}/municipios` for the cities of one UF.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use coleta_core::ports::GeoDirectoryPort;

#[derive(Debug, Deserialize)]
struct UfDto {
    sigla: String,
}

#[derive(Debug, Deserialize)]
struct MunicipioDto {
    nome: String,
}

/// HTTP client over the IBGE localidades API.
pub struct IbgeDirectory {
    http: reqwest::Client,
    base_url: String,
}

impl IbgeDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GeoDirectoryPort for IbgeDirectory {
    async fn list_ufs(&self) -> Result<Vec<String>> {
        let ufs = self
            .http
            .get(format!("{}/estados", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<UfDto>>()
            .await?;
        Ok(ufs.into_iter().map(|uf| uf.sigla).collect())
    }

    async fn list_cities(&self, uf: &str) -> Result<Vec<String>> {
        let cities = self
            .http
            .get(format!("{}/estados/{uf}/municipios", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<MunicipioDto>>()
            .await?;
        Ok(cities.into_iter().map(|city| city.nome).collect())
    }
}
