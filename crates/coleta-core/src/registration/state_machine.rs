//! Registration state machine.
//!
//! Defines a pure state transition function for the registration flow.
//! Side effects (fetches, the create request, navigation) are described as
//! actions and executed by the application layer.

use super::NOT_SELECTED;

/// Registration flow state.
///
/// Estado do fluxo de cadastro.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationState {
    /// Fresh screen, nothing touched yet.
    Empty,
    /// At least one field was touched. Re-entrant: every keystroke, click
    /// and toggle stays here.
    Editing,
    /// The create request is in flight.
    Submitting,
    /// The point was created and the user is being sent back to the landing
    /// screen.
    Done,
    /// The create request failed. The draft is kept intact so the user can
    /// resubmit.
    Failed { reason: String },
}

/// Events that drive the registration flow.
///
/// Eventos que movem o fluxo de cadastro.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationEvent {
    /// A free-text field (name, e-mail, WhatsApp) changed.
    FieldEdited,
    /// The UF select changed.
    UfSelected { uf: String },
    /// The city select changed. Never triggers a fetch on its own.
    CitySelected,
    /// The user clicked the map.
    MapClicked,
    /// An item in the grid was toggled.
    ItemToggled,
    /// The user pressed the submit button.
    SubmitRequested,
    /// The create request succeeded.
    SubmitSucceeded,
    /// The create request failed.
    SubmitFailed { reason: String },
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationAction {
    /// Fetch the city list for the given UF.
    FetchCities { uf: String },
    /// Compose the record and issue the create request.
    CreatePoint,
    /// Surface the "point created" confirmation.
    NotifyCreated,
    /// Hand control back to the landing screen.
    ReturnToLanding,
}

/// Pure registration state machine: no side effects.
///
/// Máquina de estados pura: sem efeitos colaterais.
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        state: RegistrationState,
        event: RegistrationEvent,
    ) -> (RegistrationState, Vec<RegistrationAction>) {
        use RegistrationEvent as E;
        use RegistrationState as S;

        match (state, event) {
            (
                S::Empty | S::Editing | S::Failed { .. },
                E::FieldEdited | E::CitySelected | E::MapClicked | E::ItemToggled,
            ) => (S::Editing, Vec::new()),
            (S::Empty | S::Editing | S::Failed { .. }, E::UfSelected { uf }) => {
                if uf == NOT_SELECTED {
                    (S::Editing, Vec::new())
                } else {
                    (S::Editing, vec![RegistrationAction::FetchCities { uf }])
                }
            }
            (S::Empty | S::Editing | S::Failed { .. }, E::SubmitRequested) => {
                (S::Submitting, vec![RegistrationAction::CreatePoint])
            }
            // Double-submit guard: a second press while in flight is ignored.
            (S::Submitting, E::SubmitRequested) => (S::Submitting, Vec::new()),
            (S::Submitting, E::SubmitSucceeded) => (
                S::Done,
                vec![
                    RegistrationAction::NotifyCreated,
                    RegistrationAction::ReturnToLanding,
                ],
            ),
            (S::Submitting, E::SubmitFailed { reason }) => (S::Failed { reason }, Vec::new()),
            (state, _event) => (state, Vec::new()),
        }
    }
}
