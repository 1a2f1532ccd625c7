/// a single row of the raw building-footprint table. the geometry stays in its
/// WKT encoding until the record has passed the region filter.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingRecord {
    /// zero-based position of the row in the source file
    pub row: usize,
    pub confidence: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub geometry_wkt: String,
    /// every non-geometry column of the row, in file order, as raw strings
    pub attributes: Vec<(String, String)>,
}

impl BuildingRecord {
    pub fn get_attribute(&self, column: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }
}
