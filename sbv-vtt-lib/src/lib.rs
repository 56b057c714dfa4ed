pub(crate) mod api;
pub(crate) mod error;
pub(crate) mod italic;
pub(crate) mod phrase;
pub(crate) mod sbv;
pub(crate) mod timestamp;
pub(crate) mod types;
pub(crate) mod vtt;
pub(crate) mod whitespace;

#[cfg(test)]
pub(crate) mod tests;

pub use api::*;
pub use error::{Result, SubtitleError};
pub use italic::{escape_html, italicize_line};
pub use phrase::{PhraseList, PhraseMatch, PhraseMatcher, PhraseMatches, DEFAULT_PATTERN_SIZE_LIMIT};
pub use sbv::SbvDocument;
pub use timestamp::normalize_timestamp;
pub use types::Cue;
pub use vtt::{render_vtt, VTT_HEADER};
