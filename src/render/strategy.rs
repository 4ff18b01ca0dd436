use serde::{Deserialize, Serialize};

use crate::core::Sector;

/// Which renderer draws a sector.
///
/// Only full circles without a cut-out go to the plain circle renderer; every
/// other configuration, including zero-span ones, goes through sector
/// synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeStrategy {
    BaseCircle,
    Sector,
}

impl ShapeStrategy {
    #[must_use]
    pub fn select(sector: &Sector) -> Self {
        if sector.is_full_sector() && !sector.is_ring() {
            Self::BaseCircle
        } else {
            Self::Sector
        }
    }
}
