//! Outbound collection-point record.

use serde::{Deserialize, Serialize};

/// The composed record sent to the collection-point creation service.
///
/// Field names follow the backend wire format (`uf`, `whatsapp`). Only
/// success/failure of the create request is consumed; no response body is
/// read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCollectionPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<i64>,
}
