//! Settings module for netlist
//!
//! Loads list preparation options from YAML or TOML files

pub mod settings_struct;

// Re-export settings struct and functions
pub use settings_struct::{
    update_settings_from_content, update_settings_from_file, ListSettings, Settings, GLOBAL,
};
