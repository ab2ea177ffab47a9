//! Browser-side submission bridge for the F1 lap time viewer.
//!
//! Replaces native submission of the selection form with an asynchronous
//! POST to the lap time endpoint, then either redraws the Plotly chart or
//! swaps a rendered PNG into the page. Any failure surfaces as one blocking
//! alert with fixed text; the form stays on-page and resubmittable.

mod backend;
mod error;
mod form;
mod plotly;
mod render;
mod utils;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Event, HtmlFormElement};

use backend::Backend;

pub use error::BridgeError;
pub use form::serialize_form;
pub use render::RenderStrategy;

/// Fixed backend path the serialized form is POSTed to.
pub const ENDPOINT: &str = "/get_lap_times";
/// Id of the element the chart or image is rendered into.
pub const OUTPUT_ELEMENT_ID: &str = "lap-chart";
/// Id of the form the bridge binds to by default.
pub const FORM_ELEMENT_ID: &str = "selectionForm";

/// The one user-facing failure message; every failure kind collapses into it.
const FETCH_ERROR_MESSAGE: &str = "Error occurred while fetching data.";

/// Owns the `submit` listener bound to the selection form.
///
/// Attach once when the page mounts; drop the handle (or call
/// [`detach`](Self::detach) from JS) to unbind. Each submit serializes the
/// form synchronously, then runs one asynchronous POST-and-render task.
/// Overlapping submissions run as independent tasks and the last response to
/// arrive wins the DOM.
#[wasm_bindgen]
pub struct SubmissionBridge {
    form: HtmlFormElement,
    handler: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
impl SubmissionBridge {
    /// Binds the bridge to the default `#selectionForm`.
    #[wasm_bindgen(constructor)]
    pub fn new(strategy: RenderStrategy) -> Result<SubmissionBridge, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| BridgeError::MissingElement("document".to_string()))?;
        let form = document
            .get_element_by_id(FORM_ELEMENT_ID)
            .ok_or_else(|| BridgeError::MissingElement(FORM_ELEMENT_ID.to_string()))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| {
                BridgeError::MissingElement(format!("{FORM_ELEMENT_ID} is not a form"))
            })?;
        Self::attach(form, strategy)
    }

    /// Binds the bridge to an explicit form element.
    pub fn attach(
        form: HtmlFormElement,
        strategy: RenderStrategy,
    ) -> Result<SubmissionBridge, JsValue> {
        utils::set_panic_hook();

        let bound = form.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            on_submit(&event, &bound, strategy);
        });
        form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;

        Ok(SubmissionBridge { form, handler })
    }

    /// Unbinds the submit listener and releases the handler closure.
    ///
    /// Dropping the handle from Rust has the same effect; this entry point
    /// exists for JS hosts, which never run destructors implicitly.
    pub fn detach(self) {}
}

impl Drop for SubmissionBridge {
    fn drop(&mut self) {
        let _ = self
            .form
            .remove_event_listener_with_callback("submit", self.handler.as_ref().unchecked_ref());
    }
}

/// Handles one submit event: suppresses native navigation, captures the
/// form's current values, and spawns the POST-and-render task.
fn on_submit(event: &Event, form: &HtmlFormElement, strategy: RenderStrategy) {
    // Native navigation is replaced, not raced: suppress before any work.
    event.prevent_default();

    let payload = form::serialize_form(form);

    spawn_local(async move {
        if let Err(error) = exchange(&payload, strategy).await {
            console::error_1(&JsValue::from_str(&format!(
                "lap time request failed: {error}"
            )));
            alert(FETCH_ERROR_MESSAGE);
        }
    });
}

/// One request/response cycle: POST the payload, then apply the renderer.
async fn exchange(payload: &str, strategy: RenderStrategy) -> Result<(), BridgeError> {
    let body = Backend::post_form(ENDPOINT, payload).await?;
    strategy.render(&body)
}

/// Blocking, synchronous failure surface; no response detail is exposed.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
