use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::types::protocol::DeviceCommand;

/// Lifecycle of the device channel.
///
/// `Idle` is the state before the shell has been asked to open the socket.
/// There is no transition back to `Idle` or `Connecting`: once a channel
/// closes or fails it stays that way until the page reloads.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionState {
    #[default]
    Idle,
    Connecting,
    Open,
    Closed,
    Errored,
}

/// The single device channel of this page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connection {
    pub state: ConnectionState,
    pub url: Option<String>,
}

impl Connection {
    /// Claim the channel for `url`.
    ///
    /// Returns `false` if a channel was already requested for this page, in which
    /// case nothing changes.
    pub fn open(&mut self, url: String) -> bool {
        if self.state != ConnectionState::Idle {
            return false;
        }
        self.state = ConnectionState::Connecting;
        self.url = Some(url);
        true
    }

    /// Mark the channel open. Only a channel that is still connecting can open;
    /// returns `false` and leaves the state alone otherwise.
    pub fn opened(&mut self) -> bool {
        if self.state != ConnectionState::Connecting {
            return false;
        }
        self.state = ConnectionState::Open;
        true
    }

    pub fn closed(&mut self) {
        self.state = ConnectionState::Closed;
    }

    pub fn errored(&mut self) {
        self.state = ConnectionState::Errored;
    }

    pub fn is_open(&self) -> bool {
        self.state == ConnectionState::Open
    }

    /// Serialize `command` for the wire, refusing while the channel is not open.
    pub fn encode(&self, command: &DeviceCommand) -> Result<String> {
        if !self.is_open() {
            return Err(ProtocolError::NotOpen { state: self.state });
        }

        serde_json::to_string(command).map_err(|source| ProtocolError::Encode {
            command: command.name(),
            source,
        })
    }
}
