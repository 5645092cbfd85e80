//! Event binding.
//!
//! Wires all UI event listeners. To add new events, add closures here and
//! (if async) spawn via `wasm_bindgen_futures::spawn_local`.

use crate::chatbot;
use crate::dom::{self, Elements};
use crate::generate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Helper: attach async click handler to an HtmlElement.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Fiscal-code form ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                generate::on_generate_cf(&els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.cf_form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Chat widget ──
    {
        let els2 = els.clone();
        on_click!(els.open_chatbot_btn, move |_: web_sys::MouseEvent| {
            chatbot::open(&els2);
        });
    }

    // Close, minimize and send controls are not part of the required
    // element set; bind them when the page provides them.
    if let Some(btn) = dom::by_id("close-chatbot") {
        let els2 = els.clone();
        on_click!(btn, move |_: web_sys::MouseEvent| {
            chatbot::close(&els2);
        });
    }
    if let Some(btn) = dom::by_id("minimize-chatbot") {
        let els2 = els.clone();
        on_click!(btn, move |_: web_sys::MouseEvent| {
            chatbot::toggle_minimize(&els2);
        });
    }
    if let Some(btn) = dom::by_id("send-message") {
        on_click_async!(btn, els, chatbot::on_send_message);
    }

    // Enter in the message input sends without submitting any form.
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                let els3 = els2.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    chatbot::on_send_message(&els3).await;
                });
            }
        }) as Box<dyn FnMut(_)>);
        els.user_message_input
            .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}
