//! Coleta Application Orchestration Layer
//!
//! This crate contains the registration-form use cases and the controller
//! that coordinates them.

pub mod usecases;

pub use usecases::registration::{
    CityRequest, RegistrationController, RegistrationPorts, RegistrationView, SubmitError,
};
