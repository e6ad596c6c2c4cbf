use netlist::{explode_scan, parse_network, NetworkRecord};
use serde_json::{json, Value};

#[cfg(test)]
mod record_builder_tests {
    use super::*;

    fn cafe_observation() -> Value {
        json!({
            "ssid": "CafeNet",
            "bssid": "AA:BB:CC:DD:EE:FF",
            "protection": "WPA2",
            "rssi": -65,
            "channel": 6
        })
    }

    #[test]
    fn test_build_record_from_full_map() {
        let record = parse_network(&cafe_observation());

        assert_eq!(record.ssid(), "CafeNet");
        assert_eq!(record.bssid(), "AA:BB:CC:DD:EE:FF");
        assert_eq!(record.protection(), "WPA2");
        assert_eq!(record.rssi(), -65);
        assert!(record.rssi_display().contains("-65"));
        assert_eq!(record.channel(), 6);
        assert!(record.channel_display().contains('6'));
        assert_eq!(record.vendor(), "");
    }

    #[test]
    fn test_missing_name_gives_empty_ssid() {
        let mut observation = cafe_observation();
        observation.as_object_mut().unwrap().remove("ssid");

        let record = parse_network(&observation);
        assert_eq!(record.ssid(), "");
        assert!(record.is_hidden());
        assert_eq!(record.bssid(), "AA:BB:CC:DD:EE:FF");
        assert_eq!(record.protection(), "WPA2");
        assert_eq!(record.rssi(), -65);
        assert_eq!(record.channel(), 6);
    }

    #[test]
    fn test_every_missing_key_defaults() {
        let keys = ["ssid", "bssid", "protection", "rssi", "channel"];
        // Drop every subset of the recognized keys
        for mask in 0u32..(1 << keys.len()) {
            let mut observation = cafe_observation();
            let map = observation.as_object_mut().unwrap();
            for (bit, key) in keys.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    map.remove(*key);
                }
            }

            let record = parse_network(&observation);
            let dropped = |key: &str| mask & (1 << keys.iter().position(|k| *k == key).unwrap()) != 0;

            assert_eq!(record.ssid().is_empty(), dropped("ssid"));
            assert_eq!(record.bssid().is_empty(), dropped("bssid"));
            assert_eq!(record.protection().is_empty(), dropped("protection"));
            assert_eq!(record.rssi() == 0, dropped("rssi"));
            assert_eq!(record.channel() == 0, dropped("channel"));
        }
    }

    #[test]
    fn test_mistyped_values_degrade_to_defaults() {
        let record = parse_network(&json!({
            "ssid": null,
            "bssid": ["AA", "BB"],
            "protection": { "kind": "WPA2" },
            "rssi": true,
            "channel": "six"
        }));
        assert_eq!(record, NetworkRecord::default());
        assert_eq!(record.rssi_display(), "0 dBm");
        assert_eq!(record.channel_display(), "Ch 0");
    }

    #[test]
    fn test_display_strings_are_repeatable() {
        for (rssi, channel) in [(-90, 1), (0, 0), (-30, 165), (i64::MIN, i64::MAX)] {
            let a = parse_network(&json!({ "rssi": rssi, "channel": channel }));
            let b = parse_network(&json!({ "rssi": rssi, "channel": channel }));
            assert_eq!(a.rssi_display(), b.rssi_display());
            assert_eq!(a.channel_display(), b.channel_display());
            assert!(a.rssi_display().contains(&rssi.to_string()));
            assert!(a.channel_display().contains(&channel.to_string()));
        }
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let mut observation = cafe_observation();
        let map = observation.as_object_mut().unwrap();
        map.insert("command".to_string(), json!(0));
        map.insert("vendor".to_string(), json!("Cisco Systems, Inc"));

        let record = parse_network(&observation);
        assert_eq!(record.ssid(), "CafeNet");
        assert_eq!(record.vendor(), "Cisco Systems, Inc");
    }

    #[test]
    fn test_explode_builds_one_record_per_map() {
        let content = json!([
            cafe_observation(),
            { "bssid": "00:11:22:33:44:55" },
            {}
        ])
        .to_string();

        let mut nodes = Vec::new();
        assert_eq!(explode_scan(&content, &mut nodes).unwrap(), 3);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[2], NetworkRecord::default());
        assert!(nodes.iter().all(|n| n.list_position() == 0));
    }
}
