use geojson::{FeatureCollection, GeoJson};
use serde_json::Value;
use std::{path::Path, str::FromStr};

/// helper to read a FeatureCollection from a file
pub fn read_feature_collection(input_file: &Path) -> Result<FeatureCollection, String> {
    let contents = std::fs::read_to_string(input_file).map_err(|e| format!("unable to load file: {e}"))?;
    let dataset = GeoJson::from_str(&contents).map_err(|e| format!("failed to read file as GeoJSON: {e}"))?;
    match dataset {
        GeoJson::Geometry(_) => Err(String::from(
            "GeoJSON must be a FeatureCollection but found single 'Geometry'",
        )),
        GeoJson::Feature(_) => Err(String::from(
            "GeoJSON must be a FeatureCollection but found single 'Feature'",
        )),
        GeoJson::FeatureCollection(feature_collection) => Ok(feature_collection),
    }
}

/// reads a feature property as a string. numbers are rendered as they appear in
/// the file, and null or missing properties are None.
pub fn get_string_property(feature: &geojson::Feature, key: &str) -> Option<String> {
    let value = feature.properties.as_ref()?.get(key)?;
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
