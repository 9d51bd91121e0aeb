//! Registration screen use cases.

pub mod controller;
pub mod load_catalog;
pub mod load_cities;
pub mod load_ufs;
pub mod view;

pub use controller::{CityRequest, RegistrationController, RegistrationPorts, SubmitError};
pub use load_catalog::LoadCatalog;
pub use load_cities::LoadCities;
pub use load_ufs::LoadUfs;
pub use view::RegistrationView;
