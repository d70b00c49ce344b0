//! Device channel endpoint.
//!
//! The firmware serves its command socket on the same host as the configuration
//! page. The shell knows the page host; the core only knows how to turn it into
//! the socket address.

/// Scheme used for the device command socket.
pub const SOCKET_SCHEME: &str = "ws";

/// Path of the device command socket.
pub const SOCKET_PATH: &str = "/ws";

/// Constructs the device socket address for the page host.
///
/// # Example
/// ```
/// use rfid_config_core::config::build_socket_url;
/// let url = build_socket_url("192.168.4.1");
/// assert_eq!(url, "ws://192.168.4.1/ws");
/// ```
pub fn build_socket_url(host: &str) -> String {
    format!("{SOCKET_SCHEME}://{host}{SOCKET_PATH}")
}
