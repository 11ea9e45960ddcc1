use thiserror::Error;

/// Errors surfaced while compiling a route pattern
///
/// The tokenizer accepts every input, so the only failure is a synthesized
/// expression that the regex engine rejects, almost always because of an
/// invalid inline capture such as `:id([a-z)`.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid regex {regex:?} for route pattern {source_pattern:?}: {source}")]
    InvalidRegex {
        /// Route pattern as written by the caller (empty when compiled from tokens)
        source_pattern: String,
        /// Assembled expression handed to the regex engine
        regex: String,
        #[source]
        source: fancy_regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, PatternError>;
