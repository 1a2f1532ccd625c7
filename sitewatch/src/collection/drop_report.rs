use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// reasons a building record does not make it into the exported footprints
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// a numeric cell could not be read
    InvalidRow,
    BelowConfidence,
    OutsideBbox,
    /// WKT failed to parse
    InvalidWkt,
    /// parsed, but not a POLYGON or MULTIPOLYGON
    UnsupportedGeometry,
    /// polygonal, but with a non-finite coordinate or a collapsed or self-intersecting ring
    InvalidGeometry,
}

impl Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DropReason::InvalidRow => "invalid_row",
            DropReason::BelowConfidence => "below_confidence",
            DropReason::OutsideBbox => "outside_bbox",
            DropReason::InvalidWkt => "invalid_wkt",
            DropReason::UnsupportedGeometry => "unsupported_geometry",
            DropReason::InvalidGeometry => "invalid_geometry",
        };
        write!(f, "{s}")
    }
}

/// counts of dropped records by reason, so that losing records is never silent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DropReport {
    pub invalid_row: usize,
    pub below_confidence: usize,
    pub outside_bbox: usize,
    pub invalid_wkt: usize,
    pub unsupported_geometry: usize,
    pub invalid_geometry: usize,
}

impl DropReport {
    pub fn add(&mut self, reason: DropReason) {
        match reason {
            DropReason::InvalidRow => self.invalid_row += 1,
            DropReason::BelowConfidence => self.below_confidence += 1,
            DropReason::OutsideBbox => self.outside_bbox += 1,
            DropReason::InvalidWkt => self.invalid_wkt += 1,
            DropReason::UnsupportedGeometry => self.unsupported_geometry += 1,
            DropReason::InvalidGeometry => self.invalid_geometry += 1,
        }
    }

    /// records dropped by the region filter
    pub fn filtered(&self) -> usize {
        self.below_confidence + self.outside_bbox
    }

    /// records dropped because of bad data
    pub fn rejected(&self) -> usize {
        self.invalid_row + self.invalid_wkt + self.unsupported_geometry + self.invalid_geometry
    }

    pub fn total(&self) -> usize {
        self.filtered() + self.rejected()
    }
}

impl Display for DropReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} below confidence, {} outside bbox, {} invalid rows, {} invalid WKT, {} unsupported geometries, {} invalid geometries",
            self.below_confidence,
            self.outside_bbox,
            self.invalid_row,
            self.invalid_wkt,
            self.unsupported_geometry,
            self.invalid_geometry
        )
    }
}
