use crux_core::{render::render, Command};
use log::{debug, info, warn};

use crate::error::ProtocolError;
use crate::events::{Event, SocketEvent};
use crate::model::Model;
use crate::types::DeviceCommand;
use crate::update::{dispatch, router};
use crate::{Effect, SocketCmd};

/// Ask the shell to open the device channel and show the loading indicator
/// until the device configuration arrives. Only the first call per page has
/// any effect.
pub fn open(url: String, model: &mut Model) -> Command<Effect, Event> {
    if !model.connection.open(url.clone()) {
        warn!(
            "device channel already requested (state: {:?}), ignoring open of {url}",
            model.connection.state
        );
        return Command::done();
    }

    info!("opening device channel {url}");
    model.is_loading = true;
    Command::all([render(), SocketCmd::open(url)])
}

/// Send a command to the device. Silently dropped while the channel is not open.
pub fn send(command: &DeviceCommand, model: &Model) -> Command<Effect, Event> {
    match model.connection.encode(command) {
        Ok(text) => {
            debug!("sending {} command", command.name());
            SocketCmd::send(text)
        }
        Err(e) => {
            debug!("dropping {} command: {e}", command.name());
            Command::done()
        }
    }
}

/// Handle transport events reported by the shell
pub fn handle(event: SocketEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SocketEvent::Opened => {
            if !model.connection.opened() {
                warn!(
                    "ignoring open notification in state {:?}",
                    model.connection.state
                );
                return Command::done();
            }
            info!("device channel open");
            Command::all([render(), dispatch::request_config(model)])
        }

        SocketEvent::Message(raw) => router::route(&raw, model),

        SocketEvent::Closed => {
            info!("device channel closed");
            model.connection.closed();
            render()
        }

        SocketEvent::Error(reason) => {
            warn!("{}", ProtocolError::Transport(reason));
            model.connection.errored();
            render()
        }
    }
}
