//! Core data types shared by the parser and the emitter

/// A single timed subtitle entry parsed from an SBV document
///
/// Timestamps are kept as strings: a malformed timestamp is carried
/// through to the output verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    start: String,
    end: String,
    lines: Vec<String>,
}

impl Cue {
    /// Create a new cue
    pub fn new(start: impl Into<String>, end: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            lines,
        }
    }

    /// Normalized start timestamp
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Normalized end timestamp
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Raw (unescaped) text lines in document order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The `start --> end` timing line used in WebVTT
    pub fn timing_line(&self) -> String {
        format!("{} --> {}", self.start, self.end)
    }
}
