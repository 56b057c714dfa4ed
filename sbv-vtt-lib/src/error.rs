use thiserror::Error;

/// Error type for the conversion library
///
/// The conversion pipeline itself never fails; these errors only surface
/// from the lower-level builders that callers may use directly.
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The combined phrase pattern could not be compiled
    #[error("Phrase pattern error: {0}")]
    PhrasePattern(#[from] regex::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SubtitleError>;
