mod compliance;
mod detections;
mod error;
mod footprint_source;
mod join_key;
mod site_context;
mod site_ops;
mod site_record;
mod site_writer;

pub use compliance::{read_compliance_report, ComplianceEntry, ComplianceReport, ComplianceRow};
pub use detections::{read_detections, DetectionIndex};
pub use error::SiteError;
pub use footprint_source::{get_string_property, read_feature_collection};
pub use join_key::JoinKey;
pub use site_context::{SiteContext, SiteSummary};
pub use site_ops::{derive_sites, first_ring_coords};
pub use site_record::{location_name, SiteRecord, SITE_ID_OFFSET};
pub use site_writer::write_sites;
