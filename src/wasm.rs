//! WebAssembly bindings.

use wasm_bindgen::prelude::*;

use crate::boundary::{handle, ErrorResponse, PlanRequest};
use crate::narration::SilentNarrator;
use crate::planner::Planner;

/// Plans a route from a JS object shaped like [`PlanRequest`].
///
/// Resolves to a [`PlanResponse`](crate::boundary::PlanResponse) object, or
/// throws an [`ErrorResponse`] object when the request is rejected.
#[wasm_bindgen(js_name = planJson)]
pub fn plan_json(request: JsValue) -> Result<JsValue, JsValue> {
    let request: PlanRequest = serde_wasm_bindgen::from_value(request)?;
    match handle(&Planner::default(), &request, &SilentNarrator) {
        Ok(response) => Ok(serde_wasm_bindgen::to_value(&response)?),
        Err(e) => Err(serde_wasm_bindgen::to_value(&ErrorResponse::from(&e))?),
    }
}
