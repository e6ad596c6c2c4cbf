// Keys recognized in a raw scan observation. Matching is exact and case-sensitive.
pub const KEY_SSID: &str = "ssid";
pub const KEY_BSSID: &str = "bssid";
pub const KEY_PROTECTION: &str = "protection";
pub const KEY_RSSI: &str = "rssi";
pub const KEY_CHANNEL: &str = "channel";
pub const KEY_VENDOR: &str = "vendor";

/// Key under which a batch document may nest its list of observations.
pub const KEY_NETWORKS: &str = "networks";

/// Unit appended to the signal strength display string.
pub const RSSI_UNIT: &str = "dBm";

/// Prefix of the channel display string.
pub const CHANNEL_PREFIX: &str = "Ch";
