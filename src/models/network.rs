//! Network record model
//!
//! Contains the typed record for one wireless network observed during a scan.

use std::fmt;

use serde::Serialize;

use crate::constants::scan_keys::{CHANNEL_PREFIX, RSSI_UNIT};

/// One wireless network as seen in a single scan snapshot.
///
/// Scan fields are fixed at construction. The display strings are derived
/// from `rssi` and `channel` once, in [`NetworkRecord::new`], so they can
/// never go stale. `list_position` is the only mutable field; it tracks where
/// the caller currently shows the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRecord {
    ssid: String,
    bssid: String,
    protection: String,
    vendor: String,
    rssi: i64,
    rssi_display: String,
    channel: i64,
    channel_display: String,
    list_position: usize,
}

impl NetworkRecord {
    pub fn new(
        ssid: impl Into<String>,
        bssid: impl Into<String>,
        protection: impl Into<String>,
        vendor: impl Into<String>,
        rssi: i64,
        channel: i64,
    ) -> Self {
        NetworkRecord {
            ssid: ssid.into(),
            bssid: bssid.into(),
            protection: protection.into(),
            vendor: vendor.into(),
            rssi,
            rssi_display: format_rssi(rssi),
            channel,
            channel_display: format_channel(channel),
            list_position: 0,
        }
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn bssid(&self) -> &str {
        &self.bssid
    }

    /// Security label reported by the scanner, e.g. `OPEN` or `WPA2`.
    pub fn protection(&self) -> &str {
        &self.protection
    }

    /// Manufacturer label the scanner derived from the BSSID, if any.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn rssi(&self) -> i64 {
        self.rssi
    }

    pub fn rssi_display(&self) -> &str {
        &self.rssi_display
    }

    pub fn channel(&self) -> i64 {
        self.channel
    }

    pub fn channel_display(&self) -> &str {
        &self.channel_display
    }

    pub fn list_position(&self) -> usize {
        self.list_position
    }

    pub fn set_list_position(&mut self, position: usize) {
        self.list_position = position;
    }

    /// A network that does not broadcast its SSID shows up with an empty name.
    pub fn is_hidden(&self) -> bool {
        self.ssid.is_empty()
    }
}

impl Default for NetworkRecord {
    fn default() -> Self {
        NetworkRecord::new("", "", "", "", 0, 0)
    }
}

impl fmt::Display for NetworkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.is_hidden() {
            "<hidden>"
        } else {
            self.ssid.as_str()
        };
        write!(
            f,
            "{} [{}] {} {} {}",
            name, self.bssid, self.protection, self.rssi_display, self.channel_display
        )
    }
}

/// Render a signal strength for display, e.g. `-65 dBm`.
pub fn format_rssi(rssi: i64) -> String {
    format!("{} {}", rssi, RSSI_UNIT)
}

/// Render a channel number for display, e.g. `Ch 6`.
pub fn format_channel(channel: i64) -> String {
    format!("{} {}", CHANNEL_PREFIX, channel)
}
