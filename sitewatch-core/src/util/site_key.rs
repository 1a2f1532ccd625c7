use geo::{Coord, Geometry};
use h3o::{LatLng, Resolution};

use super::geo_utils;

/// H3 resolution used for site keys. cells at this resolution cover roughly one
/// square meter, so two footprints only share a key if their centroids do.
pub const SITE_KEY_RESOLUTION: Resolution = Resolution::Fifteen;

/// builds a stable, content-derived key for a site from its centroid. the key is
/// the hex string of the H3 cell containing the centroid.
///
/// # Arguments
///
/// * `centroid` - site centroid with x as longitude and y as latitude, in degrees
///
/// # Returns
///
/// * the site key, or an error if the centroid is not a valid WGS84 coordinate
pub fn site_key(centroid: &Coord<f64>) -> Result<String, String> {
    let latlng = LatLng::new(centroid.y, centroid.x).map_err(|e| {
        format!(
            "cannot build site key from centroid ({}, {}): {e}",
            centroid.x, centroid.y
        )
    })?;
    Ok(latlng.to_cell(SITE_KEY_RESOLUTION).to_string())
}

/// site key of a footprint geometry, taken from the vertex-mean centroid of its
/// first ring.
pub fn footprint_site_key(geometry: &Geometry<f64>) -> Result<String, String> {
    let centroid = geo_utils::footprint_centroid(geometry)
        .ok_or_else(|| String::from("footprint has no ring to derive a site key from"))?;
    site_key(&centroid)
}
