mod building_reader;
mod building_record;
mod drop_report;
mod error;
pub mod filter;
mod footprint_feature;
mod geometry_ops;
mod preprocess_ops;

pub use building_reader::{read_building_records, REQUIRED_COLUMNS};
pub use building_record::BuildingRecord;
pub use drop_report::{DropReason, DropReport};
pub use error::FootprintError;
pub use footprint_feature::{attribute_value, FootprintFeature, SITE_KEY_PROPERTY};
pub use geometry_ops::{geometry_type_name, parse_footprint_wkt};
pub use preprocess_ops::{collect_footprints, run_preprocess, PreprocessSummary};
