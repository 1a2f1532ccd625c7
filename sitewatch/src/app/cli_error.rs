use crate::{collection::FootprintError, site::SiteError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitewatchCliError {
    #[error(transparent)]
    PreprocessError(#[from] FootprintError),
    #[error(transparent)]
    SiteError(#[from] SiteError),
}
