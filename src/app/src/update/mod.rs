mod connection;
mod dispatch;
mod form;
mod router;
mod scan;

use crux_core::Command;

use crate::config::build_socket_url;
use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize { host } => connection::open(build_socket_url(&host), model),

        // Transport domain (inbound messages are routed from here)
        Event::Socket(event) => connection::handle(event, model),

        // Configuration form domain
        Event::Form(event) => form::handle(event, model),

        // Network scan domain
        Event::Scan(event) => scan::handle(event, model),

        Event::TestRelay => dispatch::test_relay(model),
    }
}
