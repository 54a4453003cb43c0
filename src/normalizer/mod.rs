/*!
 * Japanese subtitle normalization.
 *
 * The pipeline rewrites dialogue events in place:
 * - `rules`: ordered regex substitution tables (literal or callback replacements)
 * - `tables`: the built-in rule and character tables
 * - `splitter`: two-speaker line splitting
 * - `filter`: empty and ruby line removal
 * - `merger`: identical-text and identical-timing merges
 * - `width`: katakana/alphanumeric width conversion and isolated widening
 * - `pipeline`: the fixed pass order
 */

pub mod filter;
pub mod merger;
pub mod pipeline;
pub mod rules;
pub mod splitter;
pub mod tables;
pub mod width;

pub use filter::LineFilter;
pub use merger::LineMerger;
pub use pipeline::{NormalizationReport, NormalizeOptions, Normalizer, RuleTables};
pub use rules::{Replacement, Rule, RuleSpec, RuleTable};
pub use splitter::LineSplitter;
