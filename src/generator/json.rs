use crate::error::Result;
use crate::models::NetworkRecord;

/// Serialize networks as a pretty-printed JSON array.
pub fn networks_to_json(nodes: &[NetworkRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}
