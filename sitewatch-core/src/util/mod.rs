pub mod geo_utils;
pub mod ring_validity;
pub mod simplify_ops;
pub mod site_key;
