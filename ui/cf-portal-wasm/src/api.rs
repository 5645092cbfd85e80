//! HTTP plumbing for the two backend endpoints.
//!
//! Wraps `fetch` for same-origin JSON POSTs and owns the result-element
//! rendering conventions. Both endpoints live on the page's own origin, so
//! paths are used as-is with no base-URL handling.

use crate::dom;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// POST a JSON body to a same-origin path and parse the JSON reply.
///
/// Transport failures, non-2xx statuses, and non-JSON bodies all come back
/// as `Err(String)`; call sites decide how to surface them.
pub async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<serde_json::Value, String> {
    let body_json =
        serde_json::to_string(body).map_err(|e| format!("failed to encode request body: {e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body_json));

    let request = Request::new_with_str_and_init(path, &opts).map_err(|e| format!("{:?}", e))?;

    let window = dom::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    let text_str = text.as_string().unwrap_or_default();

    if !resp.ok() {
        return Err(format!(
            "{} {}: {}",
            resp.status(),
            resp.status_text(),
            text_str
        ));
    }

    serde_json::from_str(&text_str)
        .map_err(|e| format!("JSON parse error: {} — raw: {}", e, text_str))
}

/// Write a success line into the result element, clearing any error state.
pub fn set_result(el: &web_sys::Element, text: &str) {
    dom::remove_class(el, "error");
    dom::set_text(el, text);
}

/// Write an error string into the result element.
pub fn set_result_error(el: &web_sys::Element, msg: &str) {
    dom::add_class(el, "error");
    dom::set_text(el, msg);
}
