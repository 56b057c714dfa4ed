//! Request fixtures for integration tests

use serde_json::{json, Value};

/// Two-cue SBV document
pub const SBV_TWO_CUES: &str =
    "0:00:00.000,0:00:02.000\nHello world\n\n0:00:02.000,0:00:04.000\nGoodbye";

/// Expected VTT for [`SBV_TWO_CUES`] with the phrase `world`
pub const VTT_TWO_CUES: &str = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nHello <i>world</i>\n\n00:00:02.000 --> 00:00:04.000\nGoodbye\n";

/// Conversion request body
pub fn convert_request(sbv_text: &str, italics_text: Option<&str>, output_name: Option<&str>) -> Value {
    let mut body = json!({ "sbvText": sbv_text });
    if let Some(italics) = italics_text {
        body["italicsText"] = json!(italics);
    }
    if let Some(name) = output_name {
        body["outputName"] = json!(name);
    }
    body
}
