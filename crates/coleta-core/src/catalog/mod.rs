//! Collection item catalog.
//!
//! Items are externally supplied by the backend catalog service and are
//! immutable from the point of view of this crate.

use serde::{Deserialize, Serialize};

/// A recyclable material category offered by the catalog service.
///
/// Categoria de material reciclável oferecida pelo serviço de catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: i64,
    pub title: String,
    /// URL (or path) of the icon shown in the item grid.
    pub image: String,
}
