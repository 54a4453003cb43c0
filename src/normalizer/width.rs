/*!
 * Character width normalization.
 *
 * - Table conversion: half-width katakana to full-width, full-width
 *   alphanumerics to half-width (literal rule tables).
 * - Isolated widening: an ASCII letter or digit with no ASCII letter or digit
 *   on either side becomes full-width. Runs of two or more stay half-width.
 */

use fancy_regex::Captures;

use super::rules::{Rule, RuleTable};
use super::tables::{FULLWIDTH_ALNUM, HALFWIDTH_KATAKANA};
use crate::errors::RuleError;

/// Distance from an ASCII letter/digit to its full-width form (U+FF10, U+FF21, U+FF41 blocks)
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Isolated at the start of the line
const ISOLATED_AT_START: &str = r"^([A-Za-z0-9])(?![A-Za-z0-9])";
/// Isolated at the end of the line
const ISOLATED_AT_END: &str = r"(?<![A-Za-z0-9])([A-Za-z0-9])$";
/// The whole line is one character
const ISOLATED_SOLE: &str = r"^([A-Za-z0-9])$";
/// Isolated with a neighbour on both sides
const ISOLATED_INTERIOR: &str = r"(?<=[^A-Za-z0-9])([A-Za-z0-9])(?=[^A-Za-z0-9])";

/// Full-width form of an ASCII letter or digit; anything else is returned as is.
pub fn to_fullwidth(c: char) -> char {
    if c.is_ascii_alphanumeric() {
        char::from_u32(c as u32 + FULLWIDTH_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

fn widen_capture(caps: &Captures<'_>) -> String {
    caps.get(1)
        .map(|m| m.as_str().chars().map(to_fullwidth).collect())
        .unwrap_or_default()
}

/// Half-width katakana (with voicing marks) to full-width katakana.
pub fn katakana_table() -> Result<RuleTable, RuleError> {
    RuleTable::compile_literal_map("halfwidth-katakana", HALFWIDTH_KATAKANA)
}

/// Full-width letters and digits to half-width.
pub fn alnum_table() -> Result<RuleTable, RuleError> {
    RuleTable::compile_literal_map("fullwidth-alnum", FULLWIDTH_ALNUM)
}

/// The four boundary patterns for isolated widening, applied in sequence.
pub fn isolated_table() -> Result<RuleTable, RuleError> {
    const NAME: &str = "isolated-widening";
    let rules = [ISOLATED_AT_START, ISOLATED_AT_END, ISOLATED_SOLE, ISOLATED_INTERIOR]
        .iter()
        .map(|pattern| Rule::callback(NAME, pattern, widen_capture))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RuleTable::from_rules(NAME, rules))
}
