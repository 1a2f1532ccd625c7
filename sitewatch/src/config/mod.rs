mod config_file;
mod preprocess;
mod site;

pub use preprocess::PreprocessConfiguration;
pub use site::SiteConfiguration;
