//! # coleta-core
//!
//! Core domain models and business logic for Coleta.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod geo;
pub mod ports;
pub mod registration;

// Re-export commonly used types at the crate root
pub use catalog::CollectionItem;
pub use config::AppConfig;
pub use geo::Coordinate;
pub use registration::{NewCollectionPoint, RegistrationDraft, NOT_SELECTED};
