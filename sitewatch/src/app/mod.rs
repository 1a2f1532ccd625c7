mod cli_bbox;
mod cli_error;
mod sitewatch_app;

pub use cli_bbox::parse_bbox;
pub use cli_error::SitewatchCliError;
pub use sitewatch_app::{SitewatchApp, SitewatchOperation};
