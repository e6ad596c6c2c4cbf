use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};

use crate::models::NetworkRecord;

const HIDDEN_LABEL: &str = "<hidden>";

/// Render networks as a text table, one row per record, in slice order.
pub fn networks_to_table(nodes: &[NetworkRecord]) -> String {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    table.set_header(vec![
        "#", "SSID", "BSSID", "Protection", "Signal", "Channel", "Vendor",
    ]);

    for node in nodes {
        let ssid = if node.is_hidden() {
            Cell::new(HIDDEN_LABEL).add_attribute(Attribute::Italic)
        } else {
            Cell::new(node.ssid())
        };
        table.add_row(vec![
            Cell::new(node.list_position()),
            ssid,
            Cell::new(node.bssid()),
            Cell::new(node.protection()),
            Cell::new(node.rssi_display()),
            Cell::new(node.channel_display()),
            Cell::new(node.vendor()),
        ]);
    }

    table.to_string()
}
