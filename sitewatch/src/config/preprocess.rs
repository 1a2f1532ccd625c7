use super::config_file::read_config_file;
use crate::collection::{filter::Bbox, filter::RegionFilter, FootprintError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.90;
pub const DEFAULT_LAT_MIN: f64 = 28.55;
pub const DEFAULT_LAT_MAX: f64 = 28.60;
pub const DEFAULT_LON_MIN: f64 = 77.20;
pub const DEFAULT_LON_MAX: f64 = 77.25;
/// in degrees of the input coordinates, roughly 11m at the equator. this is not
/// a metric distance and shrinks in the east-west direction away from the equator.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.0001;
pub const DEFAULT_FOOTPRINTS_FILE: &str = "assets/authorized_footprints.json";

/// defines behaviors for a building-footprint preprocessing run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct PreprocessConfiguration {
    /// records with a lower confidence score are dropped
    pub confidence_threshold: f64,
    /// records whose centroid falls outside this box are dropped
    pub bbox: Bbox,
    /// vertex-reduction aggressiveness, in degrees
    pub simplify_tolerance: f64,
    pub output_file: String,
}

impl Default for PreprocessConfiguration {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            bbox: Bbox::new(
                DEFAULT_LAT_MIN,
                DEFAULT_LAT_MAX,
                DEFAULT_LON_MIN,
                DEFAULT_LON_MAX,
            ),
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
            output_file: String::from(DEFAULT_FOOTPRINTS_FILE),
        }
    }
}

impl PreprocessConfiguration {
    pub fn region_filter(&self) -> RegionFilter {
        RegionFilter::new(self.bbox, self.confidence_threshold)
    }

    pub fn validate(&self) -> Result<(), FootprintError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(FootprintError::ConfigurationError(format!(
                "confidence_threshold must be in range [0,1], found {}",
                self.confidence_threshold
            )));
        }
        if !self.simplify_tolerance.is_finite() || self.simplify_tolerance < 0.0 {
            return Err(FootprintError::ConfigurationError(format!(
                "simplify_tolerance must be a non-negative number, found {}",
                self.simplify_tolerance
            )));
        }
        if self.output_file.trim().is_empty() {
            return Err(FootprintError::ConfigurationError(String::from(
                "output_file must not be empty",
            )));
        }
        self.bbox.validate().map_err(FootprintError::ConfigurationError)
    }
}

impl TryFrom<&String> for PreprocessConfiguration {
    type Error = FootprintError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        read_config_file(f).map_err(FootprintError::ConfigurationError)
    }
}
