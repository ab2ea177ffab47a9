//! Success-path rendering: chart redraw or image swap.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use common::{ChartResponse, ImageResponse};

use crate::error::BridgeError;
use crate::plotly;
use crate::OUTPUT_ELEMENT_ID;

/// Inline-image scheme marker the `<img>` source is prefixed with.
const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// How a successful response becomes a DOM update. Fixed per deployment when
/// the bridge is attached, never switched at runtime.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Decode the `graph_json` envelope field and redraw the Plotly chart.
    Chart,
    /// Swap the base64 PNG payload into the output `<img>` element.
    Image,
}

impl RenderStrategy {
    /// Applies this strategy to a response body.
    ///
    /// A malformed body is an error and flows into the generic failure path
    /// like any other failed request.
    pub fn render(self, body: &str) -> Result<(), BridgeError> {
        match self {
            RenderStrategy::Chart => render_chart(body),
            RenderStrategy::Image => render_image(body),
        }
    }
}

fn render_chart(body: &str) -> Result<(), BridgeError> {
    let envelope: ChartResponse = serde_json::from_str(body)?;
    let figure = js_sys::JSON::parse(&envelope.graph_json)
        .map_err(|_| BridgeError::MalformedResponse("graph_json is not valid JSON".into()))?;
    let data = figure_member(&figure, "data")?;
    let layout = figure_member(&figure, "layout")?;

    plotly::new_plot(OUTPUT_ELEMENT_ID, &data, &layout).map_err(BridgeError::render)
}

fn figure_member(figure: &JsValue, member: &str) -> Result<JsValue, BridgeError> {
    let value = Reflect::get(figure, &JsValue::from_str(member))
        .map_err(|_| BridgeError::MalformedResponse("graph_json is not an object".into()))?;
    if value.is_undefined() {
        return Err(BridgeError::MalformedResponse(format!(
            "figure has no {member} member"
        )));
    }
    Ok(value)
}

fn render_image(body: &str) -> Result<(), BridgeError> {
    let envelope: ImageResponse = serde_json::from_str(body)?;
    let target = output_image()?;
    target.set_src(&image_data_uri(&envelope.image));
    Ok(())
}

fn output_image() -> Result<HtmlImageElement, BridgeError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| BridgeError::MissingElement("document".to_string()))?;
    document
        .get_element_by_id(OUTPUT_ELEMENT_ID)
        .ok_or_else(|| BridgeError::MissingElement(OUTPUT_ELEMENT_ID.to_string()))?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| {
            BridgeError::MissingElement(format!("{OUTPUT_ELEMENT_ID} is not an <img> element"))
        })
}

pub(crate) fn image_data_uri(encoded: &str) -> String {
    format!("{PNG_DATA_URI_PREFIX}{encoded}")
}
