//! Registration draft aggregate.

use crate::geo::Coordinate;

use super::record::NewCollectionPoint;
use super::NOT_SELECTED;

/// The in-progress registration record, exclusively owned by the controller.
///
/// Rascunho do cadastro de ponto de coleta.
///
/// One instance exists per registration screen; it is discarded on successful
/// submission or navigation away. Every mutation goes through an explicit
/// setter so the submit step can read one consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    /// Selected UF code, or [`NOT_SELECTED`].
    pub uf: String,
    /// Selected city name, or [`NOT_SELECTED`]. Meaningful only once a UF is
    /// chosen.
    pub city: String,
    /// The point chosen on the map. Stays at the origin until a click or a
    /// geolocation fix arrives.
    pub position: Coordinate,
    /// Toggled item ids, duplicate-free, in toggle order.
    pub selected_items: Vec<i64>,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            whatsapp: String::new(),
            uf: NOT_SELECTED.to_string(),
            city: NOT_SELECTED.to_string(),
            position: Coordinate::ORIGIN,
            selected_items: Vec::new(),
        }
    }
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_whatsapp(&mut self, whatsapp: impl Into<String>) {
        self.whatsapp = whatsapp.into();
    }

    /// Select a UF. The city selection is reset to the sentinel: a city is
    /// only valid for the UF whose list it came from.
    pub fn select_uf(&mut self, uf: impl Into<String>) {
        self.uf = uf.into();
        self.city = NOT_SELECTED.to_string();
    }

    pub fn select_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Overwrite the chosen point wholesale.
    pub fn choose_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    /// Flip membership of `id` in the selected set. Toggling an absent id
    /// appends it; toggling a present id removes it.
    pub fn toggle_item(&mut self, id: i64) {
        if let Some(index) = self.selected_items.iter().position(|&item| item == id) {
            self.selected_items.remove(index);
        } else {
            self.selected_items.push(id);
        }
    }

    pub fn has_item(&self, id: i64) -> bool {
        self.selected_items.contains(&id)
    }

    /// Snapshot the draft into the outbound record. Pure read, no validation.
    pub fn to_record(&self) -> NewCollectionPoint {
        NewCollectionPoint {
            name: self.name.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            uf: self.uf.clone(),
            city: self.city.clone(),
            latitude: self.position.latitude,
            longitude: self.position.longitude,
            items: self.selected_items.clone(),
        }
    }
}
