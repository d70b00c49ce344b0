//! Outbound device commands. All of them are fire-and-forget; replies, where the
//! device sends any, are matched by their command tag in the router.

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::types::{ConfigRecord, DeviceCommand};
use crate::update::connection;
use crate::Effect;

pub fn request_config(model: &Model) -> Command<Effect, Event> {
    connection::send(&DeviceCommand::GetConfig, model)
}

/// Callers clear the previous scan state first, see `scan::begin_scan`.
pub fn request_scan(model: &Model) -> Command<Effect, Event> {
    connection::send(&DeviceCommand::Scan, model)
}

pub fn test_relay(model: &Model) -> Command<Effect, Event> {
    connection::send(&DeviceCommand::TestRelay, model)
}

pub fn save_config(record: ConfigRecord, model: &Model) -> Command<Effect, Event> {
    connection::send(&DeviceCommand::SaveConfig(record), model)
}
