pub mod file;
pub mod node_manip;

// Re-export common utilities
pub use file::{file_exists, file_get};
pub use node_manip::{
    assign_list_positions, compare_networks, compare_networks_by_key, preprocess_networks,
    sort_networks,
};
