use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure kinds for one submit/render cycle.
///
/// Every kind that reaches the user collapses into the same generic alert;
/// the kinds themselves only feed console diagnostics.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("document element missing: {0}")]
    MissingElement(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("request to {endpoint} gave status {status} {status_text}")]
    Status {
        endpoint: String,
        status: u16,
        status_text: String,
    },
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
    #[error("render failed: {0}")]
    Render(String),
}

impl BridgeError {
    /// Wraps a JS exception raised while dispatching the request.
    pub(crate) fn transport(value: JsValue) -> Self {
        BridgeError::Request(js_value_message(&value))
    }

    /// Wraps a JS exception raised by the chart collaborator.
    pub(crate) fn render(value: JsValue) -> Self {
        BridgeError::Render(js_value_message(&value))
    }
}

fn js_value_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<serde_json::Error> for BridgeError {
    fn from(error: serde_json::Error) -> Self {
        BridgeError::MalformedResponse(error.to_string())
    }
}

impl From<BridgeError> for JsValue {
    fn from(error: BridgeError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
