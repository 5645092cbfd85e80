//! Fiscal-code form submission.
//!
//! Captures the seven form fields at submit time, POSTs them to the
//! backend, and renders the returned code (or the failure) into the result
//! element.

use crate::api;
use crate::dom::{self, Elements};
use cf_api_types::{GenerateCfRequest, GenerateCfResponse};

pub const GENERATE_CF_PATH: &str = "/generate_cf";

/// Display line for a generated code.
pub fn result_line(code: &str) -> String {
    format!("Codice Fiscale: {code}")
}

/// Snapshot the form. Fails only when no `sex` radio is checked, which the
/// markup's `required` attribute normally prevents.
fn snapshot(els: &Elements) -> Result<GenerateCfRequest, String> {
    let sex = dom::checked_radio_value("sex")
        .ok_or_else(|| "select a sex option before submitting".to_string())?;

    Ok(GenerateCfRequest {
        name: dom::get_input_value(&els.name_input),
        surname: dom::get_input_value(&els.surname_input),
        day: dom::get_select_value(&els.day_select),
        month: dom::get_select_value(&els.month_select),
        year: dom::get_select_value(&els.year_select),
        sex,
        place_of_birth: dom::get_input_value(&els.place_of_birth_input),
    })
}

/// POST /generate_cf
pub async fn on_generate_cf(els: &Elements) {
    let request = match snapshot(els) {
        Ok(request) => request,
        Err(msg) => {
            api::set_result_error(&els.cf_result, &msg);
            return;
        }
    };

    match api::post_json(GENERATE_CF_PATH, &request).await {
        Ok(value) => match serde_json::from_value::<GenerateCfResponse>(value) {
            Ok(response) => {
                api::set_result(&els.cf_result, &result_line(&response.codice_fiscale));
            }
            Err(e) => {
                gloo_console::error!(format!("unexpected {GENERATE_CF_PATH} response shape: {e}"));
                api::set_result_error(
                    &els.cf_result,
                    "unexpected response from the fiscal-code service",
                );
            }
        },
        Err(e) => {
            gloo_console::error!(format!("{GENERATE_CF_PATH} request failed: {e}"));
            api::set_result_error(&els.cf_result, &e);
        }
    }
}
