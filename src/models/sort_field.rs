use std::fmt;
use std::str::FromStr;

use crate::error::NetlistError;

/// Record attribute used as a sort key.
///
/// Display strings and the protection label are not sort keys; numeric
/// fields sort on their typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Ssid,
    Bssid,
    Rssi,
    Channel,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Ssid,
        SortField::Bssid,
        SortField::Rssi,
        SortField::Channel,
    ];

    /// Get string representation of the sort field
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Ssid => "ssid",
            SortField::Bssid => "bssid",
            SortField::Rssi => "rssi",
            SortField::Channel => "channel",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = NetlistError;

    /// Selectors are matched ASCII case-insensitively. Anything else is a
    /// caller bug and is rejected rather than mapped to a default field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| NetlistError::InvalidSortField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_fields() {
        assert_eq!("ssid".parse::<SortField>().unwrap(), SortField::Ssid);
        assert_eq!("BSSID".parse::<SortField>().unwrap(), SortField::Bssid);
        assert_eq!("Rssi".parse::<SortField>().unwrap(), SortField::Rssi);
        assert_eq!("channel".parse::<SortField>().unwrap(), SortField::Channel);
    }

    #[test]
    fn test_parse_unknown_field_fails() {
        for bad in ["protection", "rssi_display", "", " ssid"] {
            match bad.parse::<SortField>() {
                Err(NetlistError::InvalidSortField(name)) => assert_eq!(name, bad),
                other => panic!("expected InvalidSortField for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
    }
}
