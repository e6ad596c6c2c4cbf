pub mod explodes;
pub mod network;

pub use explodes::explode_scan;
pub use network::{parse_network, RawScanResult};
