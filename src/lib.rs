/*!
 * # jsubnorm - Japanese subtitle normalizer
 *
 * A Rust library and command line tool that cleans up Japanese TV/web subtitles
 * into a consistent form for typesetting.
 *
 * ## Features
 *
 * - Read and write ASS/SSA (`[Events]` section) and SRT subtitles
 * - Ordered regex rule tables with literal or callback replacements
 * - Two-speaker line splitting
 * - Removal of empty and ruby ("Rubi") lines
 * - Merging of repeated and co-timed lines
 * - Katakana and alphanumeric width normalization
 * - User-supplied extra rules from the configuration file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Subtitle file parsing and writing
 * - `normalizer`: The normalization pipeline:
 *   - `normalizer::rules`: Rule engine
 *   - `normalizer::tables`: Built-in rule and character tables
 *   - `normalizer::splitter`: Two-speaker line splitting
 *   - `normalizer::filter`: Empty/ruby line removal
 *   - `normalizer::merger`: Identical text/timing merges
 *   - `normalizer::width`: Width conversion
 *   - `normalizer::pipeline`: Pass ordering
 * - `file_utils`: File system operations
 * - `app_controller`: Single file and folder processing
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod normalizer;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FileOutcome, RunOptions, RunSummary};
pub use errors::{AppError, NormalizeError, RuleError, SubtitleError};
pub use normalizer::{NormalizationReport, NormalizeOptions, Normalizer};
pub use subtitle_processor::{EventKind, SubtitleCollection, SubtitleEntry, SubtitleFormat};
