//! WebVTT document emitter

use crate::italic::italicize_line;
use crate::phrase::PhraseMatcher;
use crate::types::Cue;
use crate::whitespace;

/// First line of every WebVTT file
pub const VTT_HEADER: &str = "WEBVTT";

/// Serialize cues into a WebVTT document.
///
/// Each cue becomes `start --> end`, its italicized and escaped text lines,
/// and a blank separator line. Trailing whitespace of the whole document
/// is trimmed and exactly one newline is appended.
pub fn render_vtt(cues: &[Cue], matcher: Option<&PhraseMatcher>) -> String {
    let mut out = String::with_capacity(64 + cues.len() * 64);
    out.push_str(VTT_HEADER);
    out.push_str("\n\n");

    for cue in cues {
        out.push_str(&cue.timing_line());
        out.push('\n');

        let body: Vec<String> = cue
            .lines()
            .iter()
            .map(|line| italicize_line(line, matcher))
            .collect();
        out.push_str(&body.join("\n"));
        out.push_str("\n\n");
    }

    let trimmed = whitespace::trim_end(&out).len();
    out.truncate(trimmed);
    out.push('\n');
    out
}
