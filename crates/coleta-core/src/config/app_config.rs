//! Application configuration domain model

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Application configuration
///
/// Only the configuration the application layer actually reads: base URLs of
/// the two external HTTP services and the map display defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API (item catalog + collection-point creation)
    pub api: ApiConfig,

    /// IBGE geographic reference service
    pub ibge: IbgeConfig,

    /// Map display defaults
    pub map: MapConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

/// IBGE localidades API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbgeConfig {
    pub base_url: String,
}

/// Map display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Fixed viewport center used until a geolocation fix arrives.
    pub default_latitude: f64,
    pub default_longitude: f64,
    pub default_zoom: u8,
}

impl MapConfig {
    pub fn default_center(&self) -> Coordinate {
        Coordinate::new(self.default_latitude, self.default_longitude)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3333".to_string(),
            },
            ibge: IbgeConfig {
                base_url: "https://servicodados.ibge.gov.br/api/v1/localidades".to_string(),
            },
            map: MapConfig {
                default_latitude: -23.6420983,
                default_longitude: -46.6029821,
                default_zoom: 15,
            },
        }
    }
}
