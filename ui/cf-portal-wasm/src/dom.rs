//! DOM element bindings.
//!
//! All required host elements are resolved once at startup; a missing id
//! aborts initialization with an error naming it. The `sex` radio group is
//! the one exception: the checked member is looked up at submit time, since
//! which radio is checked changes between submissions.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

/// Value of the checked radio button in the named group, if any is checked.
pub fn checked_radio_value(group: &str) -> Option<String> {
    let selector = format!("input[name=\"{}\"]:checked", group);
    query(&selector)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

/// Raw control value, untrimmed: the form contract sends what was typed.
pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value()
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

/// Hide via an inline `display: none`, or clear the inline display so the
/// stylesheet's own value applies again. Styling stays the page's business.
pub fn set_hidden(el: &HtmlElement, hidden: bool) {
    let style = el.style();
    if hidden {
        let _ = style.set_property("display", "none");
    } else {
        let _ = style.remove_property("display");
    }
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

pub fn create_option(value: &str, text: &str) -> HtmlOptionElement {
    let opt: HtmlOptionElement = create_element("option").dyn_into().unwrap();
    opt.set_value(value);
    opt.set_text_content(Some(text));
    opt
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

// ── Elements struct ──

/// All fixed DOM element references the page scripting needs.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Birth-date selects
    pub day_select: HtmlSelectElement,
    pub month_select: HtmlSelectElement,
    pub year_select: HtmlSelectElement,

    // Fiscal-code form
    pub cf_form: HtmlFormElement,
    pub name_input: HtmlInputElement,
    pub surname_input: HtmlInputElement,
    pub place_of_birth_input: HtmlInputElement,
    pub cf_result: Element,

    // Chat widget
    pub chatbot_container: HtmlElement,
    pub open_chatbot_btn: HtmlElement,
    pub chatbot_body: HtmlElement,
    pub chatbot_input_row: HtmlElement,
    pub user_message_input: HtmlInputElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_select {
    ($id:expr) => {
        by_id_typed::<HtmlSelectElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $id)))?
    };
}

macro_rules! get_form {
    ($id:expr) => {
        by_id_typed::<HtmlFormElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all fixed DOM references. Call once after the document loads.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            day_select: get_select!("day"),
            month_select: get_select!("month"),
            year_select: get_select!("year"),

            cf_form: get_form!("cfForm"),
            name_input: get_input!("name"),
            surname_input: get_input!("surname"),
            place_of_birth_input: get_input!("placeOfBirth"),
            cf_result: get_el!("cfResult"),

            chatbot_container: get_html!("chatbot-container"),
            open_chatbot_btn: get_html!("open-chatbot"),
            chatbot_body: get_html!("chatbot-body"),
            chatbot_input_row: get_html!("chatbot-input"),
            user_message_input: get_input!("userMessage"),
        })
    }
}
