//! CodicePortal WASM Frontend
//!
//! Pure Rust + WASM implementation of the codice-fiscale request page and
//! its chat widget. Modularised for extensibility: each concern lives in
//! its own module.

pub mod api;
pub mod birthdate;
pub mod chatbot;
pub mod dom;
pub mod events;
pub mod generate;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Fill the day / month / year selectors
    let current_year = js_sys::Date::new_0().get_full_year();
    birthdate::populate(&els, current_year);

    // Chat widget starts closed, trigger visible
    chatbot::apply(&els, chatbot::ChatState::default());

    // Bind all event listeners
    events::bind_events(&els);

    Ok(())
}
