use thiserror::Error;

use crate::types::ConnectionState;

/// Errors arising while exchanging command messages with the device.
///
/// None of these reach the view model. Update handlers log them where they occur
/// and carry on with `Command::done()`.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed device message: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to encode {command} command: {source}")]
    Encode {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("device channel is not open (state: {state:?})")]
    NotOpen { state: ConnectionState },

    #[error("device channel failed: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
