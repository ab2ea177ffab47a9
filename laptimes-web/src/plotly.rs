//! Binding to the external Plotly collaborator.
//!
//! Plotly itself is loaded by the host page; only its redraw entry point is
//! imported here. A non-wasm stub keeps the crate analyzable and unit
//! testable on the native target, where the binding can never be reached.

#[cfg(target_family = "wasm")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// `Plotly.newPlot(target, data, layout)`: draws a fresh figure into
        /// the element with the given id.
        #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
        pub fn new_plot(target: &str, data: &JsValue, layout: &JsValue) -> Result<(), JsValue>;
    }
}

#[cfg(target_family = "wasm")]
pub use bindings::new_plot;

/// Stub for static analysis and native-target tests; the real import is only
/// available when targeting WASM.
#[cfg(not(target_family = "wasm"))]
pub fn new_plot(
    _target: &str,
    _data: &wasm_bindgen::JsValue,
    _layout: &wasm_bindgen::JsValue,
) -> Result<(), wasm_bindgen::JsValue> {
    panic!("Plotly bindings are only available when targeting WASM");
}
