pub mod app;
pub mod collection;
pub mod config;
pub mod export;
pub mod site;
pub mod util;
