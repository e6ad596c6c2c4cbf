//! Record builder
//!
//! Turns one loosely-typed scan observation into a [`NetworkRecord`]. The raw
//! map is read once into [`RawScanResult`], which knows exactly which keys are
//! recognized; every missing or mistyped value then falls back to a fixed
//! default. Nothing in here can fail.

use log::debug;
use serde_json::{Map, Value};

use crate::constants::scan_keys::{
    KEY_BSSID, KEY_CHANNEL, KEY_PROTECTION, KEY_RSSI, KEY_SSID, KEY_VENDOR,
};
use crate::models::NetworkRecord;

/// Scan observation as extracted from the raw map, before defaults apply.
///
/// `None` means the key was absent or its value had an unusable type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawScanResult {
    pub ssid: Option<String>,
    pub bssid: Option<String>,
    pub protection: Option<String>,
    pub vendor: Option<String>,
    pub rssi: Option<i64>,
    pub channel: Option<i64>,
}

impl RawScanResult {
    /// Extract the recognized keys from a JSON object.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        RawScanResult {
            ssid: get_text(map, KEY_SSID),
            bssid: get_text(map, KEY_BSSID),
            protection: get_text(map, KEY_PROTECTION),
            vendor: get_text(map, KEY_VENDOR),
            rssi: get_integer(map, KEY_RSSI),
            channel: get_integer(map, KEY_CHANNEL),
        }
    }

    /// Extract from an arbitrary value. Anything but an object has no
    /// recognized keys and yields an all-default result.
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(map) => Self::from_map(map),
            None => {
                debug!("Scan observation is not a map, using defaults: {}", value);
                RawScanResult::default()
            }
        }
    }
}

impl From<RawScanResult> for NetworkRecord {
    fn from(raw: RawScanResult) -> Self {
        NetworkRecord::new(
            raw.ssid.unwrap_or_default(),
            raw.bssid.unwrap_or_default(),
            raw.protection.unwrap_or_default(),
            raw.vendor.unwrap_or_default(),
            raw.rssi.unwrap_or(0),
            raw.channel.unwrap_or(0),
        )
    }
}

/// Build a record from one raw scan observation.
///
/// # Arguments
/// * `value` - The observation, normally a map such as
///   `{"ssid": "CafeNet", "bssid": "AA:BB:CC:DD:EE:FF", "protection": "WPA2", "rssi": -65, "channel": 6}`
///
/// # Returns
/// A fully populated record. Missing text fields are empty, missing numbers are zero.
pub fn parse_network(value: &Value) -> NetworkRecord {
    NetworkRecord::from(RawScanResult::from_value(value))
}

/// Read a text-like value: strings as-is, numbers in their decimal form.
fn get_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => {
            debug!("Ignoring non-text value for '{}': {}", key, other);
            None
        }
    }
}

/// Read an integer value. Floats truncate toward zero, out-of-range numbers
/// saturate, and strings are accepted when they hold a decimal integer.
fn get_integer(map: &Map<String, Value>, key: &str) -> Option<i64> {
    let value = map.get(key)?;
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if parsed.is_none() {
        debug!("Ignoring non-integer value for '{}': {}", key, value);
    }
    parsed
}
