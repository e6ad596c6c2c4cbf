pub mod json;
pub mod table;

use std::fmt;
use std::str::FromStr;

use crate::error::{NetlistError, Result};
use crate::models::NetworkRecord;

// Re-export format converters
pub use json::networks_to_json;
pub use table::networks_to_table;

/// Output rendering for a prepared network list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = NetlistError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(NetlistError::Other(format!("Unknown output format: {}", s))),
        }
    }
}

/// Render networks in the requested format
pub fn render_networks(nodes: &[NetworkRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(networks_to_table(nodes)),
        OutputFormat::Json => networks_to_json(nodes),
    }
}
