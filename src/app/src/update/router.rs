use crux_core::Command;
use log::debug;

use crate::error::Result;
use crate::events::Event;
use crate::model::Model;
use crate::types::DeviceMessage;
use crate::update::{form, scan};
use crate::Effect;

/// Parse a raw socket payload into a device message.
pub fn parse(raw: &str) -> Result<DeviceMessage> {
    Ok(serde_json::from_str(raw)?)
}

/// Route an inbound payload by its command tag.
///
/// Malformed payloads and unknown commands are dropped without touching the
/// model. Field completeness is not checked here.
pub fn route(raw: &str, model: &mut Model) -> Command<Effect, Event> {
    let message = match parse(raw) {
        Ok(message) => message,
        Err(e) => {
            debug!("dropping inbound payload: {e}");
            return Command::done();
        }
    };

    match message {
        DeviceMessage::SsidList { ssid } => scan::populate_results(ssid, model),
        DeviceMessage::Config(config) => form::hydrate(config, model),
        DeviceMessage::Unknown => {
            debug!("ignoring unknown device command");
            Command::done()
        }
    }
}
