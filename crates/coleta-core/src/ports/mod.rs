//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

pub mod catalog;
pub mod collection_point;
pub mod geo_directory;
pub mod geolocation;
pub mod navigator;
pub mod ui_port;

pub use catalog::ItemCatalogPort;
pub use collection_point::CollectionPointPort;
pub use geo_directory::GeoDirectoryPort;
pub use geolocation::GeolocationPort;
pub use navigator::NavigatorPort;
pub use ui_port::UiPort;
