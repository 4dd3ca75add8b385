//! Watch zone entity.

use serde::{Deserialize, Serialize};

use alerthub_core::types::ZoneId;

use crate::geo::Coordinates;

/// A user-drawn polygon that triggers alerts for any event inside it,
/// regardless of the user's severity and type filters.
///
/// Zones are immutable once created; editing is delete-and-recreate. The
/// polygon is not required to be convex or non-self-intersecting, and the
/// three-point minimum is the creating caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertZone {
    /// Unique zone identifier.
    pub id: ZoneId,
    /// Display name, shown in alert messages.
    pub name: String,
    /// Polygon vertices in draw order.
    pub coordinates: Vec<Coordinates>,
}

impl AlertZone {
    /// Create a zone with a fresh identifier.
    pub fn new(name: impl Into<String>, coordinates: Vec<Coordinates>) -> Self {
        Self {
            id: ZoneId::new(),
            name: name.into(),
            coordinates,
        }
    }
}
