mod footprint_writer;

pub use footprint_writer::{to_feature_collection, write_footprints};
