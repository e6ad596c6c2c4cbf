pub mod constants;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main record types for easier access
pub use error::{NetlistError, Result};
pub use models::{NetworkRecord, SortField};

// Re-export the builder and comparator
pub use parser::{explode_scan, parse_network, RawScanResult};
pub use utils::node_manip::{
    assign_list_positions, compare_networks, compare_networks_by_key, preprocess_networks,
    sort_networks,
};
