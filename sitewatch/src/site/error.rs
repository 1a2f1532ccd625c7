use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("failure reading footprints from {0}: {1}")]
    FootprintsError(String, String),
    #[error("failure reading detections from {0}: {1}")]
    DetectionsError(String, String),
    #[error("failure reading compliance report {0}: {1}")]
    ComplianceError(String, String),
    #[error("compliance report {0} is missing required columns: {1}")]
    SchemaError(String, String),
    #[error("invalid site configuration: {0}")]
    ConfigurationError(String),
    #[error("site '{0}' not found")]
    SiteNotFound(String),
    #[error("failure writing sites to {0}: {1}")]
    OutputError(String, String),
}
