//! Phrase list parsing and boundary-aware phrase matching
//!
//! All phrases are compiled into one case-insensitive alternation:
//!
//! ```text
//! (?i)(^|[^\p{L}\p{N}])(longest|...|shortest)(?:[^\p{L}\p{N}]|$)
//! ```
//!
//! The leading boundary character is part of the match and is handed back
//! to the caller separately from the phrase span. The `regex` crate has no
//! lookahead, so the trailing boundary is consumed by the pattern but the
//! scan resumes at the end of the phrase span. A single separator between
//! two phrases can therefore close the first match and open the next one.
//!
//! Whitespace inside a phrase matches any run of caption whitespace
//! (`\s` plus U+FEFF, minus U+0085), the same set used to trim phrases
//! and detect blank SBV lines.

use regex::{Regex, RegexBuilder};
use std::ops::Range;

use crate::error::Result;
use crate::whitespace::{self, is_caption_whitespace, CAPTION_WHITESPACE_CLASS};

/// Default compiled-pattern size limit (32 MiB)
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 32 * 1024 * 1024;

/// Anything that is not a Unicode letter or number
const BOUNDARY_CLASS: &str = r"[^\p{L}\p{N}]";

/// Ordered list of trimmed, non-empty phrases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    /// Parse newline-delimited phrase text. Blank lines are ignored and
    /// every phrase is trimmed.
    pub fn parse(text: &str) -> Self {
        Self::from_phrases(text.split(|c: char| c == '\n' || c == '\r'))
    }

    /// Build a list from individual phrases, trimming each and dropping blanks
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| whitespace::trim(p.as_ref()).to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Phrases in their original order
    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }

    /// Phrases sorted by descending character count. The sort is stable,
    /// so equal-length phrases keep their original relative order.
    pub fn longest_first(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.phrases.iter().map(String::as_str).collect();
        sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        sorted
    }
}

/// One accepted phrase occurrence within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Consumed leading boundary character (empty at line start)
    pub boundary: Range<usize>,
    /// The matched phrase text
    pub phrase: Range<usize>,
}

/// Compiled matching rule for a phrase list
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    regex: Regex,
    phrase_count: usize,
}

impl PhraseMatcher {
    /// Compile a matcher with the default size limit.
    ///
    /// Returns `None` for an empty list. A phrase list too large to compile
    /// is logged and also yields `None`, so italicization falls back to
    /// plain escaping instead of failing the conversion.
    pub fn build(phrases: &PhraseList) -> Option<Self> {
        Self::build_with_limit(phrases, DEFAULT_PATTERN_SIZE_LIMIT)
    }

    /// Like [`PhraseMatcher::build`] with an explicit pattern size limit
    pub fn build_with_limit(phrases: &PhraseList, size_limit: usize) -> Option<Self> {
        match Self::try_build_with_limit(phrases, size_limit) {
            Ok(matcher) => matcher,
            Err(e) => {
                tracing::warn!(
                    phrases = phrases.len(),
                    size_limit,
                    "Phrase pattern rejected, italics disabled: {}",
                    e
                );
                None
            }
        }
    }

    /// Compile a matcher, reporting compilation failures to the caller
    pub fn try_build_with_limit(phrases: &PhraseList, size_limit: usize) -> Result<Option<Self>> {
        if phrases.is_empty() {
            return Ok(None);
        }

        let alternation = phrases
            .longest_first()
            .into_iter()
            .map(phrase_pattern)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r"(^|{boundary})({alternation})(?:{boundary}|$)",
            boundary = BOUNDARY_CLASS,
        );

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()?;

        tracing::debug!(phrases = phrases.len(), "Compiled phrase matcher");

        Ok(Some(Self {
            regex,
            phrase_count: phrases.len(),
        }))
    }

    /// Number of phrases compiled into this matcher
    pub fn phrase_count(&self) -> usize {
        self.phrase_count
    }

    /// Iterate over non-overlapping phrase matches in `line`, left to right
    pub fn find_iter<'m, 'h>(&'m self, line: &'h str) -> PhraseMatches<'m, 'h> {
        PhraseMatches {
            regex: &self.regex,
            line,
            pos: 0,
        }
    }

    /// True if `line` contains at least one phrase
    pub fn is_match(&self, line: &str) -> bool {
        self.find_iter(line).next().is_some()
    }
}

/// Iterator returned by [`PhraseMatcher::find_iter`]
#[derive(Debug)]
pub struct PhraseMatches<'m, 'h> {
    regex: &'m Regex,
    line: &'h str,
    pos: usize,
}

impl Iterator for PhraseMatches<'_, '_> {
    type Item = PhraseMatch;

    fn next(&mut self) -> Option<PhraseMatch> {
        if self.pos > self.line.len() {
            return None;
        }

        // captures_at keeps `^` anchored to the real start of the line
        let caps = self.regex.captures_at(self.line, self.pos)?;
        let boundary = caps.get(1)?;
        let phrase = caps.get(2)?;

        // Phrases are never empty, so this always moves forward
        self.pos = phrase.end();

        Some(PhraseMatch {
            boundary: boundary.range(),
            phrase: phrase.range(),
        })
    }
}

/// Escape a phrase for the alternation, letting any whitespace run match
/// one or more whitespace characters.
fn phrase_pattern(phrase: &str) -> String {
    phrase
        .split(is_caption_whitespace)
        .filter(|word| !word.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(&format!("{}+", CAPTION_WHITESPACE_CLASS))
}
