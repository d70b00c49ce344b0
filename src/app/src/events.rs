use serde::{Deserialize, Serialize};

use crate::types::FormField;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page loaded; `host` is the page's own host, which also serves the device socket.
    Initialize {
        host: String,
    },

    // Domain events
    Socket(SocketEvent),
    Form(FormEvent),
    Scan(ScanEvent),

    // Actuator check
    TestRelay,
}

/// Transport events reported by the shell's socket
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SocketEvent {
    Opened,
    Message(String),
    Closed,
    Error(String),
}

/// User input on the configuration form
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit { field: FormField, value: String },
    SetAccessPoint(bool),
    Save,
}

/// Network scan controls
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Begin,
    Select(String),
}
