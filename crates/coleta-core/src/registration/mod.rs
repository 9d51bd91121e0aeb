//! Collection-point registration domain.
//!
//! The registration flow is modelled as a single owned draft aggregate plus a
//! pure state machine; side effects are executed by the application layer.

pub mod draft;
pub mod record;
pub mod state_machine;

pub use draft::RegistrationDraft;
pub use record::NewCollectionPoint;
pub use state_machine::{
    RegistrationAction, RegistrationEvent, RegistrationState, RegistrationStateMachine,
};

/// Sentinel value meaning "nothing chosen yet" for the UF and city selects.
///
/// The presentation layer renders it as the placeholder option, and a draft
/// submitted with it carries the literal `"0"` (no validation blocks submit).
pub const NOT_SELECTED: &str = "0";
