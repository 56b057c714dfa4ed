//! Public conversion API
//!
//! ```
//! let vtt = sbv_vtt_lib::convert("0:00:00.000,0:00:02.000\nHello world", "world");
//! assert_eq!(vtt, "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nHello <i>world</i>\n");
//! ```

use crate::phrase::{PhraseList, PhraseMatcher, DEFAULT_PATTERN_SIZE_LIMIT};
use crate::sbv::SbvDocument;
use crate::vtt::render_vtt;

/// Result of converting one SBV document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The complete WebVTT document
    pub vtt: String,
    /// Number of cues emitted
    pub cue_count: usize,
    /// Number of malformed time lines that were dropped
    pub skipped_time_lines: usize,
}

/// SBV to WebVTT converter bound to one phrase list
///
/// The phrase matcher is compiled once and reused for every cue line of
/// every document passed to [`Converter::convert`].
#[derive(Debug, Clone, Default)]
pub struct Converter {
    matcher: Option<PhraseMatcher>,
}

impl Converter {
    /// Create a converter for the given phrases
    pub fn new(phrases: &PhraseList) -> Self {
        Self::with_pattern_size_limit(phrases, DEFAULT_PATTERN_SIZE_LIMIT)
    }

    /// Create a converter with an explicit compiled-pattern size limit
    pub fn with_pattern_size_limit(phrases: &PhraseList, size_limit: usize) -> Self {
        Self {
            matcher: PhraseMatcher::build_with_limit(phrases, size_limit),
        }
    }

    /// Whether italicization is active
    pub fn italicizes(&self) -> bool {
        self.matcher.is_some()
    }

    /// Convert one SBV document
    pub fn convert(&self, sbv_text: &str) -> Conversion {
        let document = SbvDocument::parse(sbv_text);
        let skipped_time_lines = document.skipped_time_lines();
        let cues = document.into_cues();

        let vtt = render_vtt(&cues, self.matcher.as_ref());

        tracing::debug!(
            cues = cues.len(),
            skipped_time_lines,
            italics = self.italicizes(),
            "Converted SBV document"
        );

        Conversion {
            vtt,
            cue_count: cues.len(),
            skipped_time_lines,
        }
    }
}

/// Convert SBV text to WebVTT, italicizing the newline-delimited phrases
/// in `italics_text`.
pub fn convert(sbv_text: &str, italics_text: &str) -> String {
    Converter::new(&PhraseList::parse(italics_text))
        .convert(sbv_text)
        .vtt
}
