//! WebAssembly entry points used by the browser shell.
//!
//! The shell feeds serialized events in, performs the returned effects and
//! renders the view model. Bridge failures are logged to the console; the
//! shell gets back whatever effects were produced before the failure.

use lazy_static::lazy_static;
use log::error;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

#[wasm_bindgen(start)]
pub fn init_wasm() {
    // Fails only if a logger is already installed; that one stays in place.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Process a bincode-serialized `Event`, returning bincode-serialized effects.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        error!("failed to process event: {e}");
    }
    effects
}

/// Current view model, bincode-serialized.
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        error!("failed to serialize view model: {e}");
    }
    view
}

/// Resolve effect `id` with a bincode-serialized shell response.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    ) {
        error!("failed to resolve effect {id}: {e}");
    }
    effects
}
