//! Device socket command definitions.
//!
//! The shell owns the browser `WebSocket`. The core only asks it to open the
//! channel or to push text down it; transport events come back as
//! [`crate::events::SocketEvent`]s rather than as operation outputs.

use crux_core::{capability::Operation, Command, Request};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform on the device socket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SocketOperation {
    Open { url: String },
    Send { text: String },
}

impl Operation for SocketOperation {
    type Output = ();
}

/// Command-based socket API
pub struct Socket<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Socket<Effect, Event>
where
    Effect: Send + From<Request<SocketOperation>> + 'static,
    Event: Send + 'static,
{
    /// Ask the shell to open the device channel
    pub fn open(url: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(SocketOperation::Open { url: url.into() }).into()
    }

    /// Push an encoded command message to the device
    pub fn send(text: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(SocketOperation::Send { text: text.into() }).into()
    }
}
