/*!
 * Error types for the jsubnorm application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while compiling or applying a rule table
#[derive(Error, Debug)]
pub enum RuleError {
    /// A pattern in a rule table failed to compile
    #[error("Invalid pattern in table '{table}': {pattern} ({source})")]
    InvalidPattern {
        /// Name of the table holding the rule
        table: String,
        /// The offending pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// A pattern compiled but failed while matching (e.g. backtrack limit)
    #[error("Pattern failed while matching: {pattern} ({message})")]
    Matching {
        /// The offending pattern
        pattern: String,
        /// Error message from the regex engine
        message: String,
    },
}

/// Errors returned by the normalization pipeline
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The event collection had no entries
    #[error("Nothing to process: the subtitle has no events")]
    EmptyInput,

    /// A rule failed while a pass was running
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

/// Errors that can occur while reading or writing subtitle files
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Content could not be parsed
    #[error("Failed to parse subtitle at line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// The file extension is not a known subtitle format
    #[error("Unsupported subtitle format: {0}")]
    UnsupportedFormat(String),

    /// An ASS [Events] section has event lines before its Format line
    #[error("Missing Format line in [Events] section")]
    MissingEventsFormat,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle reading or writing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from the normalization pipeline
    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    /// Error from a rule table
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
