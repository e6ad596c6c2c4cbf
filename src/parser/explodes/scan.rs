use log::warn;
use serde_json::Value;

use crate::constants::scan_keys::KEY_NETWORKS;
use crate::error::{NetlistError, Result};
use crate::models::NetworkRecord;
use crate::parser::network::parse_network;

/// Parse a scan dump into a vector of NetworkRecord objects
///
/// The content may be JSON or YAML. Its top level is either a sequence of
/// observations or a map holding that sequence under `networks`.
///
/// # Returns
/// The number of records appended to `nodes`. An empty sequence is a valid
/// scan with no networks and yields `Ok(0)`.
///
/// # Errors
/// Fails with [`NetlistError::InvalidScan`] when the document has no
/// observation sequence or none of its entries is a map, and with the
/// parser error when the content is neither JSON nor YAML.
pub fn explode_scan(content: &str, nodes: &mut Vec<NetworkRecord>) -> Result<usize> {
    let document = parse_document(content)?;

    // Extract the observation list
    let observations = match &document {
        Value::Array(seq) => seq,
        Value::Object(map) => match map.get(KEY_NETWORKS) {
            Some(Value::Array(seq)) => seq,
            _ => {
                return Err(NetlistError::InvalidScan(format!(
                    "no '{}' sequence in document",
                    KEY_NETWORKS
                )))
            }
        },
        other => {
            return Err(NetlistError::InvalidScan(format!(
                "expected a sequence of networks, found {}",
                value_kind(other)
            )))
        }
    };

    let mut added = 0;

    for (index, observation) in observations.iter().enumerate() {
        if !observation.is_object() {
            warn!("Skipping scan entry {}: not a map", index);
            continue;
        }
        nodes.push(parse_network(observation));
        added += 1;
    }

    if added == 0 && !observations.is_empty() {
        return Err(NetlistError::InvalidScan(
            "no scan entry is a map".to_string(),
        ));
    }

    Ok(added)
}

fn parse_document(content: &str) -> Result<Value> {
    if let Ok(v) = serde_json::from_str::<Value>(content) {
        return Ok(v);
    }
    Ok(serde_yaml::from_str::<Value>(content)?)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}
