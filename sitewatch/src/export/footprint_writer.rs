use crate::collection::{FootprintError, FootprintFeature};
use crate::util::fs;
use std::path::Path;

/// collects footprints into a GeoJSON FeatureCollection, in order.
pub fn to_feature_collection(features: &[FootprintFeature]) -> geojson::FeatureCollection {
    geojson::FeatureCollection {
        bbox: None,
        features: features.iter().map(FootprintFeature::to_geojson).collect(),
        foreign_members: None,
    }
}

/// writes footprints as a GeoJSON FeatureCollection, replacing any existing
/// file at `output_file`. the containing directory is created if absent.
pub fn write_footprints(output_file: &Path, features: &[FootprintFeature]) -> Result<(), FootprintError> {
    let output = output_file.to_string_lossy().to_string();
    let collection = to_feature_collection(features);
    let bytes = serde_json::to_vec(&collection)
        .map_err(|e| FootprintError::OutputError(output.clone(), e.to_string()))?;
    fs::write_atomic(output_file, &bytes).map_err(|e| FootprintError::OutputError(output.clone(), e))?;
    log::info!("wrote {} footprints to {output}", features.len());
    Ok(())
}
