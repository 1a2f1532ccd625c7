use super::config_file::read_config_file;
use super::preprocess::DEFAULT_FOOTPRINTS_FILE;
use crate::site::{JoinKey, SiteError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DETECTIONS_FILE: &str = "assets/detected_footprints.json";
pub const DEFAULT_COMPLIANCE_FILE: &str = "assets/final_compliance_report.csv";

/// inputs used to derive the dashboard's sites. detections and compliance are
/// optional: when absent, or when the file does not exist, every site is
/// undetected and authorized.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfiguration {
    pub footprints_file: String,
    pub detections_file: Option<String>,
    pub compliance_file: Option<String>,
    pub join_key: JoinKey,
}

impl Default for SiteConfiguration {
    fn default() -> Self {
        Self {
            footprints_file: String::from(DEFAULT_FOOTPRINTS_FILE),
            detections_file: Some(String::from(DEFAULT_DETECTIONS_FILE)),
            compliance_file: Some(String::from(DEFAULT_COMPLIANCE_FILE)),
            join_key: JoinKey::default(),
        }
    }
}

impl TryFrom<&String> for SiteConfiguration {
    type Error = SiteError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        read_config_file(f).map_err(SiteError::ConfigurationError)
    }
}
