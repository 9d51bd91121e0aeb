//! HTTP adapters for the two external services.

pub mod ibge;
pub mod points_api;

pub use ibge::IbgeDirectory;
pub use points_api::PointsApiClient;
