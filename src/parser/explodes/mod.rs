pub mod scan;

pub use scan::explode_scan;
