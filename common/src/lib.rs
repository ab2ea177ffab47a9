use serde::{Deserialize, Serialize};

/// Response envelope for the chart deployment. `graph_json` carries a full
/// Plotly figure serialized as a JSON string, with `data` and `layout`
/// members the renderer hands to the chart library untouched.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChartResponse {
    pub graph_json: String,
}

/// Response envelope for the image deployment. `image` carries the
/// base64-encoded bytes of a rendered PNG.
#[derive(Debug, Deserialize, Serialize)]
pub struct ImageResponse {
    pub image: String,
}
