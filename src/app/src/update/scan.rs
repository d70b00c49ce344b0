use crux_core::{render::render, Command};
use log::{debug, info};

use crate::events::{Event, ScanEvent};
use crate::model::Model;
use crate::update::dispatch;
use crate::Effect;

/// Handle network scan controls
pub fn handle(event: ScanEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ScanEvent::Begin => begin_scan(model),

        ScanEvent::Select(ssid) => {
            if model.scan.select(&ssid) {
                render()
            } else {
                debug!("ignoring selection of unlisted network {ssid:?}");
                Command::done()
            }
        }
    }
}

/// Clear previous results, switch to the dropdown and ask the device to scan.
/// The state change happens before the command is built, so a reply can never
/// be mixed with results of an earlier scan.
pub fn begin_scan(model: &mut Model) -> Command<Effect, Event> {
    let requested = model.connection.is_open();
    model.scan.begin(requested);
    Command::all([render(), dispatch::request_scan(model)])
}

/// Apply an `ssidlist` reply. Replies to superseded scans are dropped.
pub fn populate_results(ssids: Vec<String>, model: &mut Model) -> Command<Effect, Event> {
    let count = ssids.len();
    if !model.scan.populate(ssids) {
        debug!(
            "dropping reply with {count} networks for a superseded scan ({} still pending)",
            model.scan.pending_scans
        );
        return Command::done();
    }

    info!("received {count} scanned networks");
    render()
}
