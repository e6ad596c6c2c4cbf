//! Core data models for the application
//!
//! This module contains the record produced for every scanned network and the
//! selector used to order lists of them, separated from the logic that builds
//! and sorts them.
//!
//! # Usage
//!
//! ```rust
//! use netlist::models::{NetworkRecord, SortField};
//!
//! let record = NetworkRecord::new("CafeNet", "AA:BB:CC:DD:EE:FF", "WPA2", "", -65, 6);
//! assert_eq!(record.rssi_display(), "-65 dBm");
//!
//! let field: SortField = "rssi".parse().unwrap();
//! assert_eq!(field, SortField::Rssi);
//! ```

mod network;
mod sort_field;

pub use network::*;
pub use sort_field::*;
