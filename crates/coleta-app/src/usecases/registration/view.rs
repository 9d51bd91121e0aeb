use serde::Serialize;

use coleta_core::catalog::CollectionItem;
use coleta_core::geo::Coordinate;
use coleta_core::registration::RegistrationState;

/// Serializable snapshot of the registration screen for the presentation
/// layer.
///
/// The controller owns the live state; the shell only ever renders this
/// read-only projection.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationView {
    pub items: Vec<CollectionItem>,
    pub ufs: Vec<String>,
    pub cities: Vec<String>,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub selected_items: Vec<i64>,
    /// The chosen point (marker position).
    pub marker: Coordinate,
    /// Where the map viewport is centered: the geolocation fix when one
    /// arrived, otherwise the configured display default.
    pub map_center: Coordinate,
    pub zoom: u8,
    pub state: RegistrationState,
}
