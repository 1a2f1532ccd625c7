use thiserror::Error;

#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("failure reading building data source {0}: {1}")]
    DataSourceError(String, String),
    #[error("building data source {0} is missing required columns: {1}")]
    SchemaError(String, String),
    #[error("{0}")]
    GeometryError(String),
    #[error("invalid preprocessing configuration: {0}")]
    ConfigurationError(String),
    #[error("failure writing footprints to {0}: {1}")]
    OutputError(String, String),
}
