//! Asynchronous transport to the lap time backend.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::error::BridgeError;

pub struct Backend;

impl Backend {
    /// Issues one form-encoded POST and returns the response body text.
    ///
    /// A non-success status is an error. No retry, no timeout, no
    /// cancellation; the caller owns what happens to the body.
    pub async fn post_form(endpoint: &str, body: &str) -> Result<String, BridgeError> {
        let headers = Headers::new().map_err(BridgeError::transport)?;
        headers
            .append("Content-Type", "application/x-www-form-urlencoded")
            .map_err(BridgeError::transport)?;

        let config = RequestInit::new();
        config.set_method("POST");
        config.set_mode(RequestMode::Cors);
        config.set_headers(&headers);
        config.set_body(&JsValue::from_str(body));

        let request =
            Request::new_with_str_and_init(endpoint, &config).map_err(BridgeError::transport)?;
        let window = web_sys::window()
            .ok_or_else(|| BridgeError::MissingElement("window".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(BridgeError::transport)?
            .dyn_into()
            .map_err(BridgeError::transport)?;

        if !response.ok() {
            return Err(BridgeError::Status {
                endpoint: endpoint.to_string(),
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let text = JsFuture::from(response.text().map_err(BridgeError::transport)?)
            .await
            .map_err(BridgeError::transport)?
            .as_string()
            .ok_or_else(|| BridgeError::MalformedResponse("response body is not text".into()))?;

        Ok(text)
    }
}
