//! HTTP request handlers

use axum::{
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use sbv_vtt_lib::{Converter, PhraseList};
use serde::Deserialize;
use std::sync::Arc;

use super::filename::output_filename;
use crate::error::{Result, ServerError};
use crate::state::AppState;

/// Content type of the converted document
pub const VTT_CONTENT_TYPE: &str = "text/vtt; charset=utf-8";

/// JSON body of `POST /api/convert`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Raw SBV document
    pub sbv_text: Option<String>,
    /// Newline-delimited phrases to italicize
    pub italics_text: Option<String>,
    /// Requested download file name
    pub output_name: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("sbv-vtt-server v", env!("CARGO_PKG_VERSION"))
}

/// Convert an SBV document to a downloadable WebVTT file
/// POST /api/convert
pub async fn convert_subtitles(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Response> {
    body.map_err(|rejection| {
        ServerError::from_body_rejection(rejection, state.config.limits.max_request_size_mb)
    })
    .and_then(|body| convert_body(&state, &body))
    .inspect_err(|e| state.metrics.record_error(e.kind()))
}

/// Any other method on the conversion endpoint
pub async fn method_not_allowed(State(state): State<Arc<AppState>>) -> ServerError {
    let err = ServerError::MethodNotAllowed;
    state.metrics.record_error(err.kind());
    err
}

fn convert_body(state: &AppState, body: &[u8]) -> Result<Response> {
    let request: ConvertRequest = serde_json::from_slice(body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let sbv_text = request
        .sbv_text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| ServerError::BadRequest("sbvText is required".to_string()))?;

    let phrases = PhraseList::parse(request.italics_text.as_deref().unwrap_or_default());
    let converter = Converter::with_pattern_size_limit(
        &phrases,
        state.config.conversion.pattern_size_limit_bytes(),
    );
    let conversion = converter.convert(sbv_text);

    let filename = output_filename(request.output_name.as_deref(), &state.config.conversion);

    tracing::info!(
        cues = conversion.cue_count,
        skipped_time_lines = conversion.skipped_time_lines,
        phrases = phrases.len(),
        filename = %filename,
        "Converted SBV to WebVTT"
    );
    state.metrics.record_conversion(&conversion, body.len());

    let disposition = format!("attachment; filename=\"{}\"", filename);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(VTT_CONTENT_TYPE),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).map_err(|e| ServerError::Internal(e.to_string()))?,
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    Ok((headers, conversion.vtt).into_response())
}

/// Debug endpoint - server statistics
pub async fn debug_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let stats = state.metrics.snapshot();

    Json(serde_json::json!({
        "started_at": state.started_at.to_rfc3339(),
        "uptime_secs": stats.uptime_secs,
        "requests": stats.requests,
        "conversions": stats.conversions,
        "cues_emitted": stats.cues_emitted,
        "skipped_time_lines": stats.skipped_time_lines,
        "bytes_received": stats.bytes_received,
        "bytes_served": stats.bytes_served,
        "errors": stats.errors,
    }))
}
