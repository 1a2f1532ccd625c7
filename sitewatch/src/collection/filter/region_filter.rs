use super::Bbox;
use crate::collection::{BuildingRecord, DropReason};

/// keeps building records that are confident enough and located inside the
/// region of interest.
#[derive(Debug, Clone, Copy)]
pub struct RegionFilter {
    pub bbox: Bbox,
    pub confidence_threshold: f64,
}

impl RegionFilter {
    pub fn new(bbox: Bbox, confidence_threshold: f64) -> RegionFilter {
        RegionFilter {
            bbox,
            confidence_threshold,
        }
    }

    /// tests a record against the confidence threshold and then the bounding box.
    ///
    /// # Returns
    ///
    /// * Ok if the record is kept, otherwise the reason it was dropped
    pub fn evaluate(&self, record: &BuildingRecord) -> Result<(), DropReason> {
        if !(record.confidence >= self.confidence_threshold) {
            Err(DropReason::BelowConfidence)
        } else if !self.bbox.contains(record.latitude, record.longitude) {
            Err(DropReason::OutsideBbox)
        } else {
            Ok(())
        }
    }

    pub fn accepts(&self, record: &BuildingRecord) -> bool {
        self.evaluate(record).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(confidence: f64, latitude: f64, longitude: f64) -> BuildingRecord {
        BuildingRecord {
            row: 0,
            confidence,
            latitude,
            longitude,
            geometry_wkt: String::from("POLYGON((77.22 28.58, 77.2201 28.58, 77.2201 28.5801, 77.22 28.58))"),
            attributes: vec![],
        }
    }

    fn delhi() -> RegionFilter {
        RegionFilter::new(Bbox::new(28.55, 28.60, 77.20, 77.25), 0.90)
    }

    #[test]
    fn test_low_confidence_row_is_dropped() {
        let filter = delhi();
        assert!(filter.accepts(&record(0.95, 28.58, 77.22)));
        assert_eq!(
            filter.evaluate(&record(0.80, 28.58, 77.22)),
            Err(DropReason::BelowConfidence)
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = delhi();
        assert!(filter.accepts(&record(0.90, 28.55, 77.20)));
        assert!(filter.accepts(&record(0.90, 28.60, 77.25)));
        assert_eq!(
            filter.evaluate(&record(0.99, 28.6001, 77.22)),
            Err(DropReason::OutsideBbox)
        );
        assert_eq!(
            filter.evaluate(&record(0.99, 28.58, 77.1999)),
            Err(DropReason::OutsideBbox)
        );
    }

    #[test]
    fn test_survives_iff_confident_and_inside() {
        let filter = delhi();
        let confidences = [0.0, 0.5, 0.8999, 0.9, 0.95, 1.0];
        let lats = [28.5, 28.55, 28.575, 28.60, 28.65];
        let lons = [77.1, 77.20, 77.225, 77.25, 77.3];
        for c in confidences {
            for lat in lats {
                for lon in lons {
                    let expected = c >= 0.90
                        && (28.55..=28.60).contains(&lat)
                        && (77.20..=77.25).contains(&lon);
                    assert_eq!(
                        filter.accepts(&record(c, lat, lon)),
                        expected,
                        "confidence {c}, lat {lat}, lon {lon}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_nan_confidence_is_dropped() {
        let filter = delhi();
        assert_eq!(
            filter.evaluate(&record(f64::NAN, 28.58, 77.22)),
            Err(DropReason::BelowConfidence)
        );
    }
}
