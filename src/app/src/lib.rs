pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::{navigation::NavigationOperation, socket::SocketOperation},
    config::build_socket_url,
    error::ProtocolError,
    events::{Event, FormEvent, ScanEvent, SocketEvent},
    model::Model,
    types::*,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Socket(SocketOperation),
    Navigation(NavigationOperation),
}

pub type SocketCmd = crate::commands::socket::Socket<Effect, Event>;
pub type NavigationCmd = crate::commands::navigation::Navigation<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
