//! Whitespace class shared by trimming, blank-line detection and phrase
//! matching
//!
//! Caption text uses the same set a browser trims: Unicode whitespace plus
//! the byte order mark U+FEFF, without NEXT LINE (U+0085). Rust's
//! `char::is_whitespace` disagrees on both, so `str::trim` is not used on
//! caption text.

/// Regex character class for [`is_caption_whitespace`]
pub(crate) const CAPTION_WHITESPACE_CLASS: &str = r"[[\s\x{FEFF}]--\x{85}]";

pub(crate) fn is_caption_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(is_caption_whitespace)
}

pub(crate) fn trim_end(text: &str) -> &str {
    text.trim_end_matches(is_caption_whitespace)
}

pub(crate) fn is_blank(text: &str) -> bool {
    trim(text).is_empty()
}
