mod bbox;
mod region_filter;

pub use bbox::Bbox;
pub use region_filter::RegionFilter;
