//! SBV (SubViewer) document parser
//!
//! Line-oriented state machine:
//!
//! ```text
//! SeekingTimeLine --time line--> CollectingCueLines --blank--> SkippingSeparator
//!        ^                                                          |
//!        +------------------------- non-blank ----------------------+
//! ```
//!
//! Malformed input never aborts the parse. A non-blank line without a comma
//! while seeking a time line is skipped and counted; timestamps that do not
//! have the expected shape pass through unchanged.
//!
//! Blank lines and time-line fields use the caption whitespace set from
//! [`crate::whitespace`]: a line holding only U+FEFF is blank, one holding
//! U+0085 is not.

use crate::timestamp::normalize_timestamp;
use crate::types::Cue;
use crate::whitespace::{self, is_blank};

/// Parser states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    SeekingTimeLine,
    CollectingCueLines,
    SkippingSeparator,
}

/// A parsed SBV document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SbvDocument {
    cues: Vec<Cue>,
    skipped_time_lines: usize,
}

impl SbvDocument {
    /// Parse raw SBV text. Never fails.
    pub fn parse(text: &str) -> Self {
        let text = normalize_line_endings(text);
        let mut parser = Parser::default();

        for (index, line) in text.split('\n').enumerate() {
            parser.feed(index + 1, line);
        }

        parser.finish()
    }

    /// Cues in document order
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Consume the document, returning its cues
    pub fn into_cues(self) -> Vec<Cue> {
        self.cues
    }

    /// Number of non-blank lines dropped because they were not time lines
    pub fn skipped_time_lines(&self) -> usize {
        self.skipped_time_lines
    }
}

/// Cue being assembled while collecting text lines
#[derive(Debug)]
struct PendingCue {
    start: String,
    end: String,
    lines: Vec<String>,
}

#[derive(Debug)]
struct Parser {
    state: ParseState,
    pending: Option<PendingCue>,
    cues: Vec<Cue>,
    skipped_time_lines: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            state: ParseState::SeekingTimeLine,
            pending: None,
            cues: Vec::new(),
            skipped_time_lines: 0,
        }
    }
}

impl Parser {
    fn feed(&mut self, line_no: usize, line: &str) {
        match self.state {
            ParseState::SeekingTimeLine => self.seek_time_line(line_no, line),
            ParseState::CollectingCueLines => {
                if is_blank(line) {
                    self.flush_pending();
                    self.state = ParseState::SkippingSeparator;
                } else if let Some(cue) = self.pending.as_mut() {
                    cue.lines.push(line.to_string());
                }
            }
            ParseState::SkippingSeparator => {
                if !is_blank(line) {
                    self.state = ParseState::SeekingTimeLine;
                    self.seek_time_line(line_no, line);
                }
            }
        }
    }

    fn seek_time_line(&mut self, line_no: usize, line: &str) {
        if is_blank(line) {
            return;
        }

        match split_time_line(line) {
            Some((start, end)) => {
                self.pending = Some(PendingCue {
                    start: normalize_timestamp(start),
                    end: normalize_timestamp(end),
                    lines: Vec::new(),
                });
                self.state = ParseState::CollectingCueLines;
            }
            None => {
                // skip-and-continue: stay in SeekingTimeLine
                tracing::debug!(line = line_no, "Skipping malformed SBV time line");
                self.skipped_time_lines += 1;
            }
        }
    }

    fn flush_pending(&mut self) {
        if let Some(cue) = self.pending.take() {
            self.cues.push(Cue::new(cue.start, cue.end, cue.lines));
        }
    }

    fn finish(mut self) -> SbvDocument {
        self.flush_pending();
        SbvDocument {
            cues: self.cues,
            skipped_time_lines: self.skipped_time_lines,
        }
    }
}

/// Split a `START,END` time line on its first comma, trimming both fields
fn split_time_line(line: &str) -> Option<(&str, &str)> {
    let (start, end) = line.split_once(',')?;
    Some((trim_field(start), trim_field(end)))
}

fn trim_field(field: &str) -> &str {
    whitespace::trim(field)
}

/// Convert CRLF and lone CR to LF
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
