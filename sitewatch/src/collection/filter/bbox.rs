use serde::{Deserialize, Serialize};

/// axis-aligned region of interest in WGS84 degrees. bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Bbox {
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Bbox {
        Bbox {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// tests whether a point lies within the box, boundary included
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.lat_min <= latitude
            && latitude <= self.lat_max
            && self.lon_min <= longitude
            && longitude <= self.lon_max
    }

    pub fn validate(&self) -> Result<(), String> {
        let values = [self.lat_min, self.lat_max, self.lon_min, self.lon_max];
        if values.iter().any(|v| !v.is_finite()) {
            Err(format!("bbox has non-finite bounds: {self}"))
        } else if !(self.lat_min <= self.lat_max) {
            Err(format!(
                "bbox: lat_min must not exceed lat_max, but found [{},{}]",
                self.lat_min, self.lat_max
            ))
        } else if !(self.lon_min <= self.lon_max) {
            Err(format!(
                "bbox: lon_min must not exceed lon_max, but found [{},{}]",
                self.lon_min, self.lon_max
            ))
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Display for Bbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat [{},{}] lon [{},{}]",
            self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }
}
