//! Ordering and placement of network lists

use std::cmp::Ordering;

use log::debug;

use crate::error::Result;
use crate::models::{NetworkRecord, SortField};
use crate::settings::ListSettings;

/// Compare two records on one field.
///
/// Every field sorts ascending. Text fields compare byte-wise and are case
/// sensitive; `rssi` and `channel` compare numerically. Records that match on
/// the field are `Equal`; there is no secondary key.
pub fn compare_networks(a: &NetworkRecord, b: &NetworkRecord, field: SortField) -> Ordering {
    match field {
        SortField::Ssid => a.ssid().cmp(b.ssid()),
        SortField::Bssid => a.bssid().cmp(b.bssid()),
        SortField::Rssi => a.rssi().cmp(&b.rssi()),
        SortField::Channel => a.channel().cmp(&b.channel()),
    }
}

/// Compare two records on a field named at runtime.
///
/// # Errors
/// Returns [`NetlistError::InvalidSortField`](crate::error::NetlistError::InvalidSortField)
/// when `key` names no sortable field.
pub fn compare_networks_by_key(a: &NetworkRecord, b: &NetworkRecord, key: &str) -> Result<Ordering> {
    let field = key.parse::<SortField>()?;
    Ok(compare_networks(a, b, field))
}

/// Sort records in place. The sort is stable in both directions, so records
/// that tie on `field` keep their relative order.
pub fn sort_networks(nodes: &mut [NetworkRecord], field: SortField, descending: bool) {
    if descending {
        nodes.sort_by(|a, b| compare_networks(b, a, field));
    } else {
        nodes.sort_by(|a, b| compare_networks(a, b, field));
    }
}

/// Store each record's current index as its list position.
pub fn assign_list_positions(nodes: &mut [NetworkRecord]) {
    for (index, node) in nodes.iter_mut().enumerate() {
        node.set_list_position(index);
    }
}

/// Preprocess networks - apply hidden filter, sort and list placement
///
/// # Arguments
/// * `nodes` - Vector of networks from one scan snapshot
/// * `settings` - List settings
pub fn preprocess_networks(nodes: &mut Vec<NetworkRecord>, settings: &ListSettings) {
    if settings.hide_hidden {
        let before = nodes.len();
        nodes.retain(|node| !node.is_hidden());
        debug!("Dropped {} hidden network(s)", before - nodes.len());
    }

    if let Some(field) = settings.sort_field {
        debug!(
            "Sorting {} network(s) by {} ({})",
            nodes.len(),
            field,
            if settings.descending { "descending" } else { "ascending" }
        );
        sort_networks(nodes, field, settings.descending);
    }

    if settings.assign_positions {
        assign_list_positions(nodes);
    }
}
