//! Domain-based type organization
//!
//! - config: configuration record, device payload and form state
//! - connection: device channel lifecycle
//! - protocol: outbound commands and inbound messages
//! - scan: network scan / SSID selection state

pub mod config;
pub mod connection;
pub mod protocol;
pub mod scan;

pub use config::*;
pub use connection::*;
pub use protocol::*;
pub use scan::*;
