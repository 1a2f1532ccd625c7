use super::footprint_source::{get_string_property, read_feature_collection};
use super::SiteError;
use geojson::FeatureCollection;
use std::{collections::HashSet, path::Path};

/// ids of AI-detected construction boundaries, taken from `properties.id`
#[derive(Debug, Clone, Default)]
pub struct DetectionIndex {
    ids: HashSet<String>,
}

impl DetectionIndex {
    pub fn empty() -> DetectionIndex {
        DetectionIndex::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<&FeatureCollection> for DetectionIndex {
    fn from(collection: &FeatureCollection) -> Self {
        let ids = collection
            .features
            .iter()
            .filter_map(|f| get_string_property(f, "id"))
            .collect();
        DetectionIndex { ids }
    }
}

/// reads the detected footprints file into an index of detection ids
pub fn read_detections(filepath: &Path) -> Result<DetectionIndex, SiteError> {
    let collection = read_feature_collection(filepath)
        .map_err(|e| SiteError::DetectionsError(filepath.to_string_lossy().to_string(), e))?;
    let index = DetectionIndex::from(&collection);
    log::info!(
        "read {} detections ({} with ids) from {}",
        collection.features.len(),
        index.len(),
        filepath.display()
    );
    Ok(index)
}
