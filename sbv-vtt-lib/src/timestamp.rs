//! SBV timestamp normalization
//!
//! SBV allows a single-digit hour (`0:00:02.000`); WebVTT cue timings are
//! emitted with a two-digit hour (`00:00:02.000`).

use once_cell::sync::Lazy;
use regex::Regex;

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+):([0-9]{2}):([0-9]{2}\.[0-9]{3})$").expect("valid timestamp pattern")
});

/// Normalize an SBV timestamp to `HH:MM:SS.mmm`.
///
/// The hour is left-padded to two digits. Minutes, seconds and milliseconds
/// are kept as given and not range-checked. Input that does not have the
/// timestamp shape is returned unchanged.
pub fn normalize_timestamp(raw: &str) -> String {
    match TIMESTAMP_RE.captures(raw) {
        Some(caps) => format!("{:0>2}:{}:{}", &caps[1], &caps[2], &caps[3]),
        None => raw.to_string(),
    }
}
