//! Download file name sanitization

use crate::config::ConversionConfig;

/// Build the `.vtt` download name for a requested output name.
///
/// Keeps `[A-Za-z0-9._-]`, replaces everything else with `_`, collapses
/// repeated `_`, strips leading/trailing `.` and `_`, and drops a trailing
/// `.vtt`/`.sbv` extension. Falls back to the configured default when
/// nothing usable remains.
pub fn output_filename(requested: Option<&str>, config: &ConversionConfig) -> String {
    let stem = requested
        .map(|name| sanitize_stem(name, config.max_output_name_len))
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| config.default_output_name.clone());

    format!("{}.vtt", stem)
}

fn sanitize_stem(name: &str, max_len: usize) -> String {
    let name = strip_subtitle_extension(name.trim());

    let mut sanitized = String::with_capacity(name.len());
    for ch in name.chars() {
        let ch = if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_') {
            ch
        } else {
            '_'
        };
        if ch == '_' && sanitized.ends_with('_') {
            continue;
        }
        sanitized.push(ch);
    }

    // Only ASCII remains, so byte truncation is safe
    let trimmed = sanitized.trim_matches(is_edge_char);
    let truncated = &trimmed[..trimmed.len().min(max_len)];
    truncated.trim_end_matches(is_edge_char).to_string()
}

fn strip_subtitle_extension(name: &str) -> &str {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".vtt") || lower.ends_with(".sbv") {
        &name[..name.len() - 4]
    } else {
        name
    }
}

fn is_edge_char(c: char) -> bool {
    c == '.' || c == '_'
}
