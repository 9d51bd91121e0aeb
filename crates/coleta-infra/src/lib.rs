pub mod config;
pub mod geo;
pub mod http;

pub use self::config::load_config;
pub use geo::StaticGeolocation;
pub use http::{IbgeDirectory, PointsApiClient};
