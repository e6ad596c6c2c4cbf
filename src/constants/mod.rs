pub mod scan_keys;
