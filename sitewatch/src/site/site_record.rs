use serde::{Deserialize, Serialize};

/// offset added to a feature's position to build an id for features without one
pub const SITE_ID_OFFSET: usize = 1000;

/// a construction site as shown on the dashboard, derived from one footprint
/// feature and its compliance result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteRecord {
    /// `properties.id` of the feature, or its position plus [`SITE_ID_OFFSET`]
    pub id: String,
    /// position of the feature in the footprint collection
    pub index: String,
    /// content-derived key, stable under reordering of the footprint collection
    pub site_key: String,
    pub location_name: String,
    /// vertex-mean latitude of the first ring
    pub lat: f64,
    /// vertex-mean longitude of the first ring
    pub lon: f64,
    pub is_authorized: bool,
    pub expansion_pct: f64,
    /// a detected construction boundary exists with the same id
    pub detected: bool,
}

/// label shown for a site in dashboard tables and dropdowns
pub fn location_name(id: &str) -> String {
    format!("Site {id}")
}
